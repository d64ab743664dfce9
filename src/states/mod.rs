//! State Management Layer
//!
//! Persisted configuration shared by the components.

mod config;

pub use config::*;
