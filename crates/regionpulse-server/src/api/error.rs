//! HTTP mapping for `RegionPulseError`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use regionpulse_core::{RegionPulseError, ValidationErrors};

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    err: RegionPulseError,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn error(&self) -> &RegionPulseError {
        &self.err
    }

    /// Malformed JSON is a 422 on `body`; a missing JSON content type keeps
    /// axum's 415, anything else keeps the rejection's own status.
    pub fn from_json_rejection(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(e) => {
                ValidationErrors::single("body", e.body_text()).into()
            }
            other => Self {
                status: other.status(),
                err: RegionPulseError::BadRequest(other.body_text()),
            },
        }
    }
}

impl From<RegionPulseError> for ApiError {
    fn from(err: RegionPulseError) -> Self {
        let status = match &err {
            RegionPulseError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RegionPulseError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RegionPulseError::DatasetLoad(_) => StatusCode::SERVICE_UNAVAILABLE,
            RegionPulseError::UnsupportedVersion | RegionPulseError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self { status, err }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        RegionPulseError::from(errors).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.err.client_code().as_str();
        let body = match &self.err {
            RegionPulseError::Validation(errors) => json!({
                "code": code,
                "msg": "request validation failed",
                "errors": errors,
            }),
            other => json!({
                "code": code,
                "msg": other.to_string(),
            }),
        };
        (self.status, Json(body)).into_response()
    }
}
