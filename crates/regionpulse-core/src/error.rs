//! Shared error type across regionpulse crates.

use thiserror::Error;

use crate::request::ValidationErrors;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Malformed body (not JSON, wrong content type).
    BadRequest,
    /// Body parsed but failed the request schema.
    ValidationFailed,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Dataset could not be loaded.
    DatasetUnavailable,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::ValidationFailed => "VALIDATION_FAILED",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::DatasetUnavailable => "DATASET_UNAVAILABLE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RegionPulseError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum RegionPulseError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("dataset load failed: {0}")]
    DatasetLoad(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl RegionPulseError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            RegionPulseError::BadRequest(_) => ClientCode::BadRequest,
            RegionPulseError::Validation(_) => ClientCode::ValidationFailed,
            RegionPulseError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            RegionPulseError::DatasetLoad(_) => ClientCode::DatasetUnavailable,
            RegionPulseError::Internal(_) => ClientCode::Internal,
        }
    }
}

impl From<ValidationErrors> for RegionPulseError {
    fn from(errors: ValidationErrors) -> Self {
        RegionPulseError::Validation(errors)
    }
}
