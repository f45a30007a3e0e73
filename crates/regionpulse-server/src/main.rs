//! regionpulse server
//!
//! - Loads the telemetry dataset once (fatal on any error)
//! - Serves `POST /api` plus ops endpoints
//! - Drains on Ctrl-C

use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use regionpulse_core::error::{Result, RegionPulseError};
use regionpulse_server::{app_state::AppState, config, dataset, router};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, code = e.client_code().as_str(), "regionpulse-server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let explicit = std::env::args_os().nth(1).map(PathBuf::from);
    let loaded = config::resolve(explicit.as_deref())?;
    let listen = loaded.cfg.server.listen_addr()?;

    let dataset = dataset::load_from_file(loaded.dataset_path())?;
    let state = AppState::new(dataset);
    let app = router::build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| RegionPulseError::Internal(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, "regionpulse-server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| RegionPulseError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal(state: AppState) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable; running until killed");
        std::future::pending::<()>().await;
    }
    state.metrics().set_draining();
    tracing::info!("shutdown requested, draining");
}
