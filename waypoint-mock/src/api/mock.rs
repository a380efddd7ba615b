//! Fixed-outcome API Handlers
//!
//! Mirrors the hosted mock API: the path segment picks the outcome and no
//! job state is kept.

use axum::{Json, extract::Path};
use uuid::Uuid;
use waypoint_core::domain::route::{JobHandle, RouteStatus};
use waypoint_core::dto::route::{RouteRequest, SubmitResponse};

use crate::api::error::{ApiError, ApiResult};
use crate::service::route_service;

/// POST /mock/route/{outcome}
/// `success` returns a fresh token, `500` fails with a server error
pub async fn mock_submit(
    Path(outcome): Path<String>,
    Json(req): Json<RouteRequest>,
) -> ApiResult<Json<SubmitResponse>> {
    tracing::debug!(
        "Mock submit ({}) from {:?} to {:?}",
        outcome,
        req.origin,
        req.destination
    );

    match outcome.as_str() {
        "success" => Ok(Json(SubmitResponse {
            token: JobHandle::new(Uuid::new_v4().to_string()),
        })),
        "500" => Err(ApiError::InternalError("Mock server error".to_string())),
        other => Err(unknown_outcome(other)),
    }
}

/// GET /mock/route/{outcome}
/// `success`, `inprogress`, `failure` or `500`
pub async fn mock_status(Path(outcome): Path<String>) -> ApiResult<Json<RouteStatus>> {
    tracing::debug!("Mock status ({})", outcome);

    let status = match outcome.as_str() {
        "success" => RouteStatus::Succeeded(route_service::sample_route()?),
        "inprogress" => RouteStatus::Pending,
        "failure" => route_service::failure_status()?,
        "500" => return Err(ApiError::InternalError("Mock server error".to_string())),
        other => return Err(unknown_outcome(other)),
    };

    Ok(Json(status))
}

fn unknown_outcome(outcome: &str) -> ApiError {
    ApiError::NotFound(format!("Unknown mock outcome '{}'", outcome))
}
