//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for the two ledger operations
//! - The error-to-status translation of the core's typed results
//! - Request timeout and tracing layers

pub mod routes;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
}

/// Creates the main application router.
///
/// The timeout layer bounds every request, so a stalled storage call
/// surfaces as a transient failure instead of hanging the caller; the
/// open database transaction rolls back on drop, leaving no partial state.
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}
