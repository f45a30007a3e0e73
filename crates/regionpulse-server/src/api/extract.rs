//! Validating body extractor for `POST /api`.

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

use regionpulse_core::TelemetryRequest;

use super::error::ApiError;

/// A body that already passed [`TelemetryRequest::from_value`].
#[derive(Debug)]
pub struct TelemetryJson(pub TelemetryRequest);

#[async_trait]
impl<S> FromRequest<S> for TelemetryJson
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(ApiError::from_json_rejection)?;
        let parsed = TelemetryRequest::from_value(&body)?;
        Ok(Self(parsed))
    }
}
