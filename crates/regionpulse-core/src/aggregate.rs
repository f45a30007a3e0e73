//! Per-region aggregation for `POST /api`.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::dataset::{Dataset, RegionSamples};
use crate::model::RegionMetrics;
use crate::request::TelemetryRequest;
use crate::stats;

const P95: f64 = 0.95;

/// Region name -> metrics, in request order, one entry per distinct region.
///
/// Serializes as a JSON object. Regions without samples never appear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsReport {
    entries: Vec<(String, RegionMetrics)>,
}

impl MetricsReport {
    pub fn get(&self, region: &str) -> Option<&RegionMetrics> {
        self.entries
            .iter()
            .find(|(name, _)| name == region)
            .map(|(_, m)| m)
    }

    pub fn contains(&self, region: &str) -> bool {
        self.get(region).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegionMetrics)> {
        self.entries.iter().map(|(name, m)| (name.as_str(), m))
    }

    fn insert(&mut self, region: &str, metrics: RegionMetrics) {
        match self.entries.iter_mut().find(|(name, _)| name == region) {
            Some((_, slot)) => *slot = metrics,
            None => self.entries.push((region.to_owned(), metrics)),
        }
    }
}

impl Serialize for MetricsReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, metrics) in &self.entries {
            map.serialize_entry(name, metrics)?;
        }
        map.end()
    }
}

/// Summarize one region. `None` when the region has no samples.
pub fn region_metrics(samples: &RegionSamples, threshold_ms: f64) -> Option<RegionMetrics> {
    let latencies = samples.latencies_sorted();
    let avg_latency = stats::mean(latencies)?;
    let p95_latency = stats::quantile_sorted(latencies, P95)?;
    let avg_uptime = stats::mean(samples.uptimes())?;
    let breaches = stats::count_above_sorted(latencies, threshold_ms);

    Some(RegionMetrics {
        avg_latency: stats::round2(avg_latency),
        p95_latency: stats::round2(p95_latency),
        avg_uptime: stats::round2(avg_uptime),
        breaches: breaches as u64,
    })
}

/// Build the response for a validated request.
pub fn aggregate(dataset: &Dataset, req: &TelemetryRequest) -> MetricsReport {
    let mut report = MetricsReport::default();
    for region in &req.regions {
        let Some(metrics) = dataset
            .region(region)
            .and_then(|samples| region_metrics(samples, req.threshold_ms))
        else {
            tracing::trace!(region = %region, "no samples, omitted");
            continue;
        };
        report.insert(region, metrics);
    }
    report
}
