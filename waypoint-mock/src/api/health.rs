//! Health Check API Handler

use axum::{http::StatusCode, response::IntoResponse};

/// GET /health
/// Liveness probe for the mock service
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
