//! regionpulse server library entry.
//!
//! Wires config, dataset loading, the `POST /api` handler and the ops
//! endpoints into an axum router. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod dataset;
pub mod obs;
pub mod ops;
pub mod router;
