//! Route poller
//!
//! Submits a routing job and polls its status until the job reaches a
//! terminal state or the retry budget runs out.
//!
//! Each resolution is one cooperative task. It suspends while a request is in
//! flight and while waiting between polls, spawns nothing, and shares no
//! state with other resolutions.
//!
//! # Retry boundary
//!
//! The first status poll always happens. After the n-th `Pending` result the
//! poller waits only if another poll is still admitted (`n < max_retries`);
//! otherwise it fails with [`ResolveError::RetryBudgetExhausted`] straight
//! away. So a job polled `max(1, max_retries)` times sleeps at most
//! `max(1, max_retries) - 1` times, and `max_retries = 0` means one poll and
//! no sleep.

use thiserror::Error;
use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use waypoint_core::domain::policy::RetryPolicy;
use waypoint_core::domain::route::{Route, RouteStatus};

use crate::error::ClientError;
use crate::transport::RouteTransport;

/// Terminal failures of a route resolution
///
/// Exactly one is reported per failed resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Submitting the job failed; no poll was made
    #[error(transparent)]
    Submit(ClientError),

    /// A status poll failed; polling stopped
    #[error(transparent)]
    Poll(ClientError),

    /// The routing service reported the job as failed
    #[error("{reason}")]
    RemoteFailure { reason: String },

    /// The job was still pending after the last admitted poll
    #[error("Maximum retries exceeded")]
    RetryBudgetExhausted {
        /// Number of status polls made
        attempts: u32,
    },

    /// The caller cancelled the resolution
    #[error("Route resolution cancelled")]
    Cancelled,
}

impl ResolveError {
    /// The HTTP status code behind a transport failure, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Submit(err) | Self::Poll(err) => err.status_code(),
            _ => None,
        }
    }

    /// Whether this error came from the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Submit(_) | Self::Poll(_))
    }
}

/// Drives submit -> poll -> terminal state over a [`RouteTransport`]
#[derive(Debug, Clone)]
pub struct RoutePoller<T> {
    transport: T,
}

impl<T: RouteTransport> RoutePoller<T> {
    /// Creates a new poller on top of a transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolves a route, see [`resolve_route`]
    pub async fn resolve_route(
        &self,
        origin: &str,
        destination: &str,
        policy: &RetryPolicy,
    ) -> Result<Route, ResolveError> {
        resolve_route(&self.transport, origin, destination, policy).await
    }

    /// Resolves a route that the caller can abandon, see [`resolve_route_with_cancel`]
    pub async fn resolve_route_with_cancel(
        &self,
        origin: &str,
        destination: &str,
        policy: &RetryPolicy,
        cancel: &CancellationToken,
    ) -> Result<Route, ResolveError> {
        resolve_route_with_cancel(&self.transport, origin, destination, policy, cancel).await
    }
}

/// Submits a routing job and polls until it succeeds, fails or runs out of retries
///
/// Inputs are passed to the transport unchanged; validating them is the
/// caller's job.
///
/// # Errors
/// - [`ResolveError::Submit`] if the submission fails (never retried)
/// - [`ResolveError::Poll`] if any status poll fails
/// - [`ResolveError::RemoteFailure`] if the job is reported as failed
/// - [`ResolveError::RetryBudgetExhausted`] if the job stays pending
pub async fn resolve_route<T: RouteTransport + ?Sized>(
    transport: &T,
    origin: &str,
    destination: &str,
    policy: &RetryPolicy,
) -> Result<Route, ResolveError> {
    resolve_route_with_cancel(
        transport,
        origin,
        destination,
        policy,
        &CancellationToken::new(),
    )
    .await
}

/// Same as [`resolve_route`], but gives up with [`ResolveError::Cancelled`]
/// as soon as `cancel` fires, whether a request or a delay is outstanding
pub async fn resolve_route_with_cancel<T: RouteTransport + ?Sized>(
    transport: &T,
    origin: &str,
    destination: &str,
    policy: &RetryPolicy,
    cancel: &CancellationToken,
) -> Result<Route, ResolveError> {
    let submitted = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(ResolveError::Cancelled),
        submitted = transport.submit_job(origin, destination) => submitted,
    };
    let handle = submitted.map_err(|e| {
        warn!("Failed to submit route job: {}", e);
        ResolveError::Submit(e)
    })?;

    info!(
        "Submitted route job {} (max retries: {}, delay: {:?})",
        handle, policy.max_retries, policy.retry_delay
    );

    let mut pending_seen: u32 = 0;

    loop {
        let fetched = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ResolveError::Cancelled),
            fetched = transport.fetch_job_status(&handle) => fetched,
        };
        let status = fetched.map_err(|e| {
            warn!("Failed to fetch status of route job {}: {}", handle, e);
            ResolveError::Poll(e)
        })?;

        match status {
            RouteStatus::Succeeded(route) => {
                info!(
                    "Route job {} succeeded after {} poll(s)",
                    handle,
                    pending_seen.saturating_add(1)
                );
                return Ok(route);
            }
            RouteStatus::Failed { reason } => {
                warn!("Route job {} failed: {}", handle, reason);
                return Err(ResolveError::RemoteFailure { reason });
            }
            RouteStatus::Pending => {
                pending_seen = pending_seen.saturating_add(1);

                if !policy.allows_poll(pending_seen) {
                    warn!(
                        "Route job {} still pending after {} poll(s), giving up",
                        handle, pending_seen
                    );
                    return Err(ResolveError::RetryBudgetExhausted {
                        attempts: pending_seen,
                    });
                }

                let delay = policy.delay_for(pending_seen);
                debug!(
                    "Route job {} in progress, retry {} in {:?}",
                    handle, pending_seen, delay
                );

                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return Err(ResolveError::Cancelled),
                    _ = time::sleep(delay) => {}
                }
            }
        }
    }
}
