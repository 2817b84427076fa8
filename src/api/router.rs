use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::registration;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints (no state needed)
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Registration endpoint
        .merge(registration::create_registration_router())
        // Add state and middleware
        .with_state(state)
        .layer(middleware::from_fn(super::middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
}
