//! Route API Handlers
//!
//! HTTP endpoints for submitting route jobs and polling their status.

use axum::{
    Json,
    extract::{Path, State},
};
use waypoint_core::domain::route::{JobHandle, RouteStatus};
use waypoint_core::dto::route::{RouteRequest, SubmitResponse};

use crate::AppState;
use crate::api::error::ApiResult;
use crate::service::route_service;

/// POST /route
/// Submit a route job
pub async fn submit_route(
    State(state): State<AppState>,
    Json(req): Json<RouteRequest>,
) -> ApiResult<Json<SubmitResponse>> {
    tracing::info!(
        "Submitting route from {:?} to {:?}",
        req.origin,
        req.destination
    );

    let token = route_service::submit_route(&state, req).await?;

    Ok(Json(SubmitResponse { token }))
}

/// GET /route/{token}
/// Get the status of a route job
pub async fn get_route_status(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> ApiResult<Json<RouteStatus>> {
    tracing::debug!("Polling route job: {}", token);

    let status = route_service::poll_route(&state, &JobHandle::from(token)).await?;

    Ok(Json(status))
}
