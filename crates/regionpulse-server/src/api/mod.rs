//! `POST /api`: per-region latency and uptime summary.

pub mod error;
pub mod extract;

use std::time::Instant;

use axum::{extract::State, Json};

use regionpulse_core::{aggregate, MetricsReport};

use crate::app_state::AppState;

pub use error::ApiError;
pub use extract::TelemetryJson;

pub async fn get_latency_metrics(
    State(state): State<AppState>,
    body: Result<TelemetryJson, ApiError>,
) -> Result<Json<MetricsReport>, ApiError> {
    let metrics = state.metrics();
    let TelemetryJson(req) = body.map_err(|e| {
        metrics.api_requests.inc(&[("outcome", "invalid")]);
        tracing::debug!(status = %e.status(), error = %e.error(), "telemetry request rejected");
        e
    })?;

    let started = Instant::now();
    let report = aggregate(state.dataset(), &req);
    metrics.aggregate_duration.observe(&[], started.elapsed());

    let matched = req.regions.iter().filter(|r| report.contains(r)).count();
    let unmatched = req.regions.len() - matched;
    if matched > 0 {
        metrics
            .regions_requested
            .add(&[("matched", "true")], matched as u64);
    }
    if unmatched > 0 {
        metrics
            .regions_requested
            .add(&[("matched", "false")], unmatched as u64);
    }
    metrics.api_requests.inc(&[("outcome", "ok")]);

    tracing::debug!(
        requested = req.regions.len(),
        reported = report.len(),
        threshold_ms = req.threshold_ms,
        "telemetry summary computed"
    );
    Ok(Json(report))
}
