//! Health check and monitoring endpoints
//!
//! Provides health and readiness endpoints for load balancer integration
//! and service availability monitoring.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Serialize;

use super::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Health status ("healthy" or "unhealthy")
    pub status: String,
    /// Server version
    pub version: String,
    /// Server uptime in seconds
    pub uptime_secs: u64,
    /// Environment the server is running in
    pub environment: String,
    /// Response cap applied to generation requests, if any
    pub max_occurrences: Option<usize>,
}

/// Readiness response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyResponse {
    /// Ready status
    pub ready: bool,
}

/// Build the health routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
}

/// GET /health - Health check endpoint
///
/// Returns the server health status, version, uptime, and configuration
/// summary.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = state.start_time.elapsed().as_secs();

    let response = HealthResponse {
        status: "healthy".to_string(),
        version: crate::VERSION.to_string(),
        uptime_secs: uptime,
        environment: state.config.environment.to_string(),
        max_occurrences: state.config.max_occurrences,
    };

    (StatusCode::OK, Json(response))
}

/// GET /ready - Readiness probe endpoint
///
/// Returns 200 OK when the server is ready to accept requests.
async fn ready_handler() -> impl IntoResponse {
    let response = ReadyResponse { ready: true };
    (StatusCode::OK, Json(response))
}
