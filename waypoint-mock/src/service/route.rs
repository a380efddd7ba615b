//! Route Service
//!
//! Business logic for mock route jobs: accepting submissions and deciding
//! what each status poll reports.

use uuid::Uuid;
use waypoint_core::domain::route::{Coordinates, JobHandle, Route, RouteStatus};
use waypoint_core::dto::route::RouteRequest;

use crate::AppState;

/// Reason reported for destinations that cannot be reached by car
pub const UNREACHABLE_REASON: &str = "Location not accessible by car";

/// Distance of the sample route in meters
pub const SAMPLE_DISTANCE: f64 = 20000.0;

/// Driving time of the sample route in seconds
pub const SAMPLE_TIME: f64 = 1800.0;

/// Service error type
#[derive(Debug)]
pub enum RouteError {
    NotFound(JobHandle),
    ValidationError(String),
    InternalError(String),
}

/// Accept a new route job
pub async fn submit_route(state: &AppState, req: RouteRequest) -> Result<JobHandle, RouteError> {
    validate_request(&req)?;

    let handle = JobHandle::new(Uuid::new_v4().to_string());
    state.store.insert(handle.clone(), req).await;

    tracing::info!("Route job accepted: {}", handle);

    Ok(handle)
}

/// Report the status of a route job, counting this poll
///
/// A job is dropped from the store once its terminal status has been
/// reported; later polls of its token are `NotFound`.
pub async fn poll_route(state: &AppState, handle: &JobHandle) -> Result<RouteStatus, RouteError> {
    let job = state
        .store
        .record_poll(handle)
        .await
        .ok_or_else(|| RouteError::NotFound(handle.clone()))?;

    if job.polls <= state.config.pending_polls {
        tracing::debug!("Route job {} in progress (poll {})", handle, job.polls);
        return Ok(RouteStatus::Pending);
    }

    let status = resolve_outcome(&job.request)?;
    state.store.remove(handle).await;
    tracing::debug!("Route job {} resolved: {}", handle, status);

    Ok(status)
}

/// Terminal status of a job, decided from its request alone
pub fn resolve_outcome(req: &RouteRequest) -> Result<RouteStatus, RouteError> {
    if req.destination.to_lowercase().contains("unreachable") {
        return failure_status();
    }

    sample_route().map(RouteStatus::Succeeded)
}

/// The fixed route every successful job reports
pub fn sample_route() -> Result<Route, RouteError> {
    Route::new(
        vec![
            Coordinates::new("22.372081", "114.107877"),
            Coordinates::new("22.326442", "114.167811"),
            Coordinates::new("22.284419", "114.159510"),
        ],
        SAMPLE_DISTANCE,
        SAMPLE_TIME,
    )
    .map_err(|e| RouteError::InternalError(e.to_string()))
}

/// The fixed failure every unreachable job reports
pub fn failure_status() -> Result<RouteStatus, RouteError> {
    RouteStatus::failed(UNREACHABLE_REASON).map_err(|e| RouteError::InternalError(e.to_string()))
}

// =============================================================================
// Validation
// =============================================================================

fn validate_request(req: &RouteRequest) -> Result<(), RouteError> {
    if req.origin.trim().is_empty() {
        return Err(RouteError::ValidationError(
            "origin must not be empty".to_string(),
        ));
    }

    if req.destination.trim().is_empty() {
        return Err(RouteError::ValidationError(
            "destination must not be empty".to_string(),
        ));
    }

    Ok(())
}
