//! Axum router wiring.
//!
//! `POST /api` carries the cross-origin policy; ops endpoints do not.

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::{api, app_state::AppState, ops};

/// Any origin, any request header, credentials allowed, `POST` + preflight only.
///
/// Origin and headers are mirrored rather than `*` since wildcards are not
/// valid together with credentials.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api", post(api::get_latency_metrics))
        .layer(cors_layer());

    Router::new()
        .merge(api)
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
