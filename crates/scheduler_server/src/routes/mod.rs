//! Route modules for the scheduler server
//!
//! This module contains endpoint group-specific routers:
//! - schedule: Occurrence generation endpoints
//! - health: Health check and monitoring endpoints

pub mod health;
pub mod schedule;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            config,
            start_time: std::time::Instant::now(),
        }
    }
}

/// Build the main application router by merging all route modules
///
/// The dashboard frontend is served from a different origin, so CORS is
/// permissive; request/response tracing is layered over every route.
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    let state = AppState::new(config);

    Router::new()
        .merge(health::routes())
        .merge(schedule::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
