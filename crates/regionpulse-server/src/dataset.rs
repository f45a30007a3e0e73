//! Startup dataset loading.
//!
//! Any failure here is fatal: the process must not serve with a partial or
//! missing dataset.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use regionpulse_core::error::{Result, RegionPulseError};
use regionpulse_core::Dataset;

pub fn load_from_file(path: impl AsRef<Path>) -> Result<Arc<Dataset>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| {
        RegionPulseError::DatasetLoad(format!("read {} failed: {e}", path.display()))
    })?;
    let dataset = Dataset::from_json_slice(&bytes).map_err(|e| match e {
        RegionPulseError::DatasetLoad(msg) => {
            RegionPulseError::DatasetLoad(format!("{}: {msg}", path.display()))
        }
        other => other,
    })?;

    if dataset.is_empty() {
        tracing::warn!(path = %path.display(), "telemetry dataset is empty; every region will be omitted");
    }
    tracing::info!(
        path = %path.display(),
        records = dataset.len(),
        regions = dataset.region_count(),
        "telemetry dataset loaded"
    );
    Ok(Arc::new(dataset))
}
