//! Test utilities for route transports.
//!
//! This module provides [`ScriptedTransport`], a deterministic test double
//! for [`RouteTransport`] that replays pre-configured responses without
//! making HTTP requests and records every call it receives.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use waypoint_core::domain::route::{JobHandle, RouteStatus};

use crate::error::{ClientError, Result};
use crate::transport::RouteTransport;

/// Scripted `RouteTransport` for testing.
///
/// Submission either returns the configured token or fails with a status
/// code. Status fetches pop scripted responses in order; fetching past the
/// end of the script is a parse error so that runaway polling shows up in
/// tests instead of hanging.
///
/// # Example
///
/// ```
/// use waypoint_client::test_support::ScriptedTransport;
/// use waypoint_core::domain::route::RouteStatus;
///
/// let transport = ScriptedTransport::new("token-1")
///     .then_status(RouteStatus::Pending)
///     .then_transport_error(500);
/// assert_eq!(transport.status_calls(), 0);
/// ```
#[derive(Debug)]
pub struct ScriptedTransport {
    submit: Scripted<JobHandle>,
    statuses: Mutex<VecDeque<Scripted<RouteStatus>>>,
    calls: Mutex<CallLog>,
}

#[derive(Debug, Clone)]
enum Scripted<T> {
    Ok(T),
    HttpError(u16),
}

#[derive(Debug, Default)]
struct CallLog {
    submitted: Vec<(String, String)>,
    polled: Vec<String>,
}

impl ScriptedTransport {
    /// Create a transport whose submission returns `token`.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_submit(Scripted::Ok(JobHandle::new(token)))
    }

    /// Create a transport whose submission fails with `status`.
    #[must_use]
    pub fn failing_submit(status: u16) -> Self {
        Self::with_submit(Scripted::HttpError(status))
    }

    fn with_submit(submit: Scripted<JobHandle>) -> Self {
        Self {
            submit,
            statuses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(CallLog::default()),
        }
    }

    /// Append a status to return from the next unanswered poll.
    #[must_use]
    pub fn then_status(self, status: RouteStatus) -> Self {
        self.push(Scripted::Ok(status))
    }

    /// Append a transport failure to return from the next unanswered poll.
    #[must_use]
    pub fn then_transport_error(self, status: u16) -> Self {
        self.push(Scripted::HttpError(status))
    }

    fn push(self, entry: Scripted<RouteStatus>) -> Self {
        self.statuses
            .lock()
            .expect("status script poisoned")
            .push_back(entry);
        self
    }

    /// Number of submissions received.
    pub fn submit_calls(&self) -> usize {
        self.log().submitted.len()
    }

    /// Number of status polls received.
    pub fn status_calls(&self) -> usize {
        self.log().polled.len()
    }

    /// Origin/destination pairs passed to submission, in order.
    pub fn submitted(&self) -> Vec<(String, String)> {
        self.log().submitted.clone()
    }

    /// Tokens passed to status polls, in order.
    pub fn polled_tokens(&self) -> Vec<String> {
        self.log().polled.clone()
    }

    fn log(&self) -> std::sync::MutexGuard<'_, CallLog> {
        self.calls.lock().expect("call log poisoned")
    }
}

#[async_trait]
impl RouteTransport for ScriptedTransport {
    async fn submit_job(&self, origin: &str, destination: &str) -> Result<JobHandle> {
        self.log()
            .submitted
            .push((origin.to_string(), destination.to_string()));

        match &self.submit {
            Scripted::Ok(handle) => Ok(handle.clone()),
            Scripted::HttpError(status) => Err(ClientError::transport(*status, "scripted")),
        }
    }

    async fn fetch_job_status(&self, handle: &JobHandle) -> Result<RouteStatus> {
        self.log().polled.push(handle.as_str().to_string());

        let next = self
            .statuses
            .lock()
            .expect("status script poisoned")
            .pop_front();

        match next {
            Some(Scripted::Ok(status)) => Ok(status),
            Some(Scripted::HttpError(status)) => Err(ClientError::transport(status, "scripted")),
            None => Err(ClientError::ParseError(
                "no scripted status left".to_string(),
            )),
        }
    }
}
