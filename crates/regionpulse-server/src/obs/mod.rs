//! In-process metrics for the telemetry endpoint.
//!
//! Counters and histograms are plain atomics behind `DashMap` label sets,
//! rendered in Prometheus text format by `GET /metrics`.

pub mod metrics;

pub use metrics::ServerMetrics;
