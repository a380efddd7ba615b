//! Client for the hosted mock routing API
//!
//! The mock API is stateless: the outcome of every call is chosen by the
//! path segment rather than by the submitted job, which makes it handy for
//! exercising each branch of the poll loop against a real HTTP server.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use waypoint_core::domain::route::{JobHandle, RouteStatus};
use waypoint_core::dto::route::{RouteRequest, SubmitResponse};

use crate::error::Result;
use crate::handle_response;
use crate::transport::RouteTransport;

/// Base URL of the hosted mock API
pub const DEFAULT_MOCK_API_URL: &str = "https://sg-mock-api.lalamove.com/mock/route";

/// Outcome requested from the mock submission endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitOutcome {
    #[default]
    Success,
    ServerError,
}

impl SubmitOutcome {
    /// Path segment selecting this outcome
    pub fn as_segment(&self) -> &'static str {
        match self {
            SubmitOutcome::Success => "success",
            SubmitOutcome::ServerError => "500",
        }
    }
}

/// Outcome requested from the mock status endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusOutcome {
    #[default]
    Success,
    InProgress,
    Failure,
    ServerError,
}

impl StatusOutcome {
    /// Path segment selecting this outcome
    pub fn as_segment(&self) -> &'static str {
        match self {
            StatusOutcome::Success => "success",
            StatusOutcome::InProgress => "inprogress",
            StatusOutcome::Failure => "failure",
            StatusOutcome::ServerError => "500",
        }
    }
}

/// HTTP client for the mock routing API
#[derive(Debug, Clone)]
pub struct MockApiClient {
    base_url: String,
    client: Client,
    submit_outcome: SubmitOutcome,
    status_outcome: StatusOutcome,
}

impl Default for MockApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_MOCK_API_URL)
    }
}

impl MockApiClient {
    /// Create a mock client that succeeds on both endpoints
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a mock client with a custom HTTP client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            submit_outcome: SubmitOutcome::default(),
            status_outcome: StatusOutcome::default(),
        }
    }

    /// Select the submission outcome
    pub fn with_submit_outcome(mut self, outcome: SubmitOutcome) -> Self {
        self.submit_outcome = outcome;
        self
    }

    /// Select the status outcome
    pub fn with_status_outcome(mut self, outcome: StatusOutcome) -> Self {
        self.status_outcome = outcome;
        self
    }

    /// Get the base URL of the mock API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn outcome_url(&self, segment: &str) -> String {
        format!("{}/{}", self.base_url, segment)
    }
}

#[async_trait]
impl RouteTransport for MockApiClient {
    async fn submit_job(&self, origin: &str, destination: &str) -> Result<JobHandle> {
        let url = self.outcome_url(self.submit_outcome.as_segment());
        let response = self
            .client
            .post(&url)
            .json(&RouteRequest::new(origin, destination))
            .send()
            .await?;

        let submitted: SubmitResponse = handle_response(response).await?;
        Ok(submitted.token)
    }

    async fn fetch_job_status(&self, handle: &JobHandle) -> Result<RouteStatus> {
        // The mock API keys on the outcome segment, not the token
        debug!("Fetching mock status for job {}", handle);
        let url = self.outcome_url(self.status_outcome.as_segment());
        let response = self.client.get(&url).send().await?;

        handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_segments() {
        assert_eq!(SubmitOutcome::Success.as_segment(), "success");
        assert_eq!(SubmitOutcome::ServerError.as_segment(), "500");
        assert_eq!(StatusOutcome::InProgress.as_segment(), "inprogress");
        assert_eq!(StatusOutcome::Failure.as_segment(), "failure");
    }

    #[test]
    fn test_outcome_url() {
        let client = MockApiClient::new("http://localhost:3000/mock/route/")
            .with_status_outcome(StatusOutcome::Failure);
        assert_eq!(client.base_url(), "http://localhost:3000/mock/route");
        assert_eq!(
            client.outcome_url(client.status_outcome.as_segment()),
            "http://localhost:3000/mock/route/failure"
        );
    }

    #[test]
    fn test_default_points_at_hosted_api() {
        let client = MockApiClient::default();
        assert_eq!(client.base_url(), DEFAULT_MOCK_API_URL);
        assert_eq!(client.submit_outcome, SubmitOutcome::Success);
        assert_eq!(client.status_outcome, StatusOutcome::Success);
    }
}
