//! REST API server for the taskcal scheduling engine
//!
//! This crate provides an HTTP REST API over the scheduling kernel,
//! exposing occurrence generation and health endpoints to the operations
//! dashboard.

pub mod config;
pub mod routes;
pub mod server;

// Re-export scheduler dependencies for integration
pub use adapter_sheets;
pub use scheduler_core;
pub use scheduler_models;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
