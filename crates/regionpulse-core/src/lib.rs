//! regionpulse core: telemetry data model, request validation, the in-memory
//! dataset index, and per-region aggregation.
//!
//! This crate carries no transport or runtime dependencies. The server crate
//! owns HTTP, config and process lifecycle; everything here is a pure function
//! of an immutable [`Dataset`] and a validated [`TelemetryRequest`].
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! All fallible paths surface as `RegionPulseError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod aggregate;
pub mod dataset;
pub mod error;
pub mod model;
pub mod request;
pub mod stats;

pub use aggregate::{aggregate, MetricsReport};
pub use dataset::{Dataset, RegionSamples};
pub use error::{Result, RegionPulseError};
pub use model::{RegionMetrics, TelemetryRecord};
pub use request::{FieldError, TelemetryRequest, ValidationErrors};
