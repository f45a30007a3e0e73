//! Shared application state.

use std::sync::Arc;

use regionpulse_core::Dataset;

use crate::obs::ServerMetrics;

/// Cloned into every handler. The dataset is reachable only through `&Dataset`.
#[derive(Clone)]
pub struct AppState {
    dataset: Arc<Dataset>,
    metrics: Arc<ServerMetrics>,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            metrics: Arc::new(ServerMetrics::default()),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn metrics(&self) -> &ServerMetrics {
        &self.metrics
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }

    /// Gauge lines appended to `/metrics`.
    pub fn metrics_extra(&self) -> [(&'static str, u64); 2] {
        [
            ("regionpulse_dataset_records", self.dataset.len() as u64),
            ("regionpulse_dataset_regions", self.dataset.region_count() as u64),
        ]
    }
}
