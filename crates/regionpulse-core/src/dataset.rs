//! Immutable, region-indexed telemetry dataset.
//!
//! Built once at startup and shared read-only (`Arc<Dataset>`) by every
//! request. No method takes `&mut self`.

use std::collections::HashMap;

use crate::error::{Result, RegionPulseError};
use crate::model::TelemetryRecord;

/// All samples recorded for one region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionSamples {
    latencies_sorted: Vec<f64>,
    uptimes: Vec<f64>,
}

impl RegionSamples {
    /// Latencies in ascending order.
    pub fn latencies_sorted(&self) -> &[f64] {
        &self.latencies_sorted
    }

    /// Uptime percentages in load order.
    pub fn uptimes(&self) -> &[f64] {
        &self.uptimes
    }

    pub fn len(&self) -> usize {
        self.uptimes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uptimes.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    by_region: HashMap<String, RegionSamples>,
    records: usize,
}

impl Dataset {
    /// Parse a JSON array of records.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Self::from_json_slice(s.as_bytes())
    }

    /// Parse a JSON array of records from raw bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let records: Vec<TelemetryRecord> = serde_json::from_slice(bytes)
            .map_err(|e| RegionPulseError::DatasetLoad(format!("invalid telemetry json: {e}")))?;
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: impl IntoIterator<Item = TelemetryRecord>) -> Self {
        let mut by_region: HashMap<String, RegionSamples> = HashMap::new();
        let mut count = 0usize;
        for r in records {
            let samples = by_region.entry(r.region).or_default();
            samples.latencies_sorted.push(r.latency_ms);
            samples.uptimes.push(r.uptime_percent);
            count += 1;
        }
        for samples in by_region.values_mut() {
            samples.latencies_sorted.sort_by(f64::total_cmp);
        }

        tracing::debug!(records = count, regions = by_region.len(), "dataset indexed");
        Self {
            by_region,
            records: count,
        }
    }

    /// Total number of records loaded.
    pub fn len(&self) -> usize {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records == 0
    }

    /// Number of distinct regions.
    pub fn region_count(&self) -> usize {
        self.by_region.len()
    }

    /// Exact, case-sensitive lookup.
    pub fn region(&self, name: &str) -> Option<&RegionSamples> {
        self.by_region.get(name)
    }

    /// Distinct region names, unordered.
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.by_region.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn groups_and_sorts_per_region() {
        let ds = Dataset::from_json_str(
            r#"[
                {"region": "b", "latency_ms": 300, "uptime_percent": 99.5},
                {"region": "a", "latency_ms": 120.5, "uptime_percent": 98},
                {"region": "b", "latency_ms": 100, "uptime_percent": 97.0, "service": "x"}
            ]"#,
        )
        .expect("must parse");

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.region_count(), 2);
        let b = ds.region("b").unwrap();
        assert_eq!(b.latencies_sorted(), &[100.0, 300.0]);
        assert_eq!(b.uptimes(), &[99.5, 97.0]);
        assert!(ds.region("B").is_none());
    }

    #[test]
    fn empty_array_is_valid() {
        let ds = Dataset::from_json_str("[]").unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.regions().count(), 0);
    }

    #[test]
    fn schema_errors_are_dataset_load_failures() {
        for bad in [
            r#"[{"region": "a", "latency_ms": "fast", "uptime_percent": 99}]"#,
            r#"[{"region": "a", "uptime_percent": 99}]"#,
            r#"{"region": "a", "latency_ms": 1, "uptime_percent": 99}"#,
            "not json",
        ] {
            let err = Dataset::from_json_str(bad).expect_err("must fail");
            assert_eq!(err.client_code().as_str(), "DATASET_UNAVAILABLE");
        }
    }
}
