//! API Module
//!
//! HTTP API layer for the mock routing service.
//! Each submodule handles endpoints for a specific concern.

pub mod error;
pub mod health;
pub mod mock;
pub mod route;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Route job endpoints
        .route("/route", post(route::submit_route))
        .route("/route/{token}", get(route::get_route_status))
        // Fixed-outcome endpoints of the hosted mock API
        .route(
            "/mock/route/{outcome}",
            get(mock::mock_status).post(mock::mock_submit),
        )
        // Add state and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
