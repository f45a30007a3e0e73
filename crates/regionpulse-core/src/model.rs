//! Telemetry wire types.

use serde::{Deserialize, Serialize};

/// One row of the static dataset.
///
/// Extra fields present in the source file are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TelemetryRecord {
    pub region: String,
    pub latency_ms: f64,
    pub uptime_percent: f64,
}

/// Summary statistics for one region, derived per request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionMetrics {
    /// Mean latency, rounded to 2 decimals.
    pub avg_latency: f64,
    /// 95th percentile latency (linear interpolation), rounded to 2 decimals.
    pub p95_latency: f64,
    /// Mean uptime percentage, rounded to 2 decimals.
    pub avg_uptime: f64,
    /// Samples strictly above the requested threshold.
    pub breaches: u64,
}
