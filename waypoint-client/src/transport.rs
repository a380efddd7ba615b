//! Transport primitives
//!
//! The two round trips the polling orchestrator is built on. Implementations
//! perform exactly one request per call and never retry; the orchestrator
//! stays agnostic to which backend is wired in.

use async_trait::async_trait;
use waypoint_core::domain::route::{JobHandle, RouteStatus};

use crate::error::Result;

/// Trait for submitting routing jobs and fetching their status
#[async_trait]
pub trait RouteTransport: Send + Sync {
    /// Submits a new routing job
    ///
    /// # Arguments
    /// * `origin` - Address of the pickup point
    /// * `destination` - Address of the drop-off point
    ///
    /// # Returns
    /// The handle identifying the submitted job
    async fn submit_job(&self, origin: &str, destination: &str) -> Result<JobHandle>;

    /// Fetches the current status of a submitted job
    ///
    /// # Arguments
    /// * `handle` - The handle returned by [`RouteTransport::submit_job`]
    async fn fetch_job_status(&self, handle: &JobHandle) -> Result<RouteStatus>;
}

#[async_trait]
impl<T: RouteTransport + ?Sized> RouteTransport for Box<T> {
    async fn submit_job(&self, origin: &str, destination: &str) -> Result<JobHandle> {
        (**self).submit_job(origin, destination).await
    }

    async fn fetch_job_status(&self, handle: &JobHandle) -> Result<RouteStatus> {
        (**self).fetch_job_status(handle).await
    }
}

#[async_trait]
impl<T: RouteTransport + ?Sized> RouteTransport for std::sync::Arc<T> {
    async fn submit_job(&self, origin: &str, destination: &str) -> Result<JobHandle> {
        (**self).submit_job(origin, destination).await
    }

    async fn fetch_job_status(&self, handle: &JobHandle) -> Result<RouteStatus> {
        (**self).fetch_job_status(handle).await
    }
}
