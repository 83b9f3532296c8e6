//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, tracing, panic capture),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Request bodies are a handful of numbers.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/calculate-sun", post(handlers::calculate_sun))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::ephemeris::{AnalyticalEphemeris, EphemerisConfig};

    #[test]
    fn test_router_creation() {
        let ephemeris = Arc::new(AnalyticalEphemeris::new(EphemerisConfig::new("ephe")));
        let state = AppState::new(ephemeris);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
