//! In-memory job table
//!
//! Holds every submitted job for the lifetime of the process.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use waypoint_core::domain::route::JobHandle;
use waypoint_core::dto::route::RouteRequest;

/// A submitted job and how often it has been polled
#[derive(Debug, Clone)]
pub struct MockJob {
    pub request: RouteRequest,
    pub polls: u32,
}

/// Shared job table keyed by token
///
/// A job stays here from submission until it has reported its terminal
/// status once.
#[derive(Debug, Clone, Default)]
pub struct JobStore {
    jobs: Arc<RwLock<HashMap<JobHandle, MockJob>>>,
}

impl JobStore {
    /// Insert a freshly submitted job
    pub async fn insert(&self, handle: JobHandle, request: RouteRequest) {
        self.jobs
            .write()
            .await
            .insert(handle, MockJob { request, polls: 0 });
    }

    /// Count one poll of a job and return its updated record
    ///
    /// Returns `None` for an unknown token.
    pub async fn record_poll(&self, handle: &JobHandle) -> Option<MockJob> {
        let mut jobs = self.jobs.write().await;
        let job = jobs.get_mut(handle)?;
        job.polls = job.polls.saturating_add(1);
        Some(job.clone())
    }

    /// Forget a job
    pub async fn remove(&self, handle: &JobHandle) -> Option<MockJob> {
        self.jobs.write().await.remove(handle)
    }

    /// Number of known jobs
    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.jobs.read().await.is_empty()
    }
}
