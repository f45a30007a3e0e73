//! Top-level facade crate for regionpulse.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use regionpulse_core::*;
}

pub mod server {
    pub use regionpulse_server::*;
}
