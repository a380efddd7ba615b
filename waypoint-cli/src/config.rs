//! Configuration module
//!
//! Handles CLI configuration: which backend to talk to, its address, and how
//! patiently to poll.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::ValueEnum;
use waypoint_client::{
    ClientConfig, MockApiClient, RouteClient, RouteTransport, StatusOutcome, SubmitOutcome,
};
use waypoint_core::domain::policy::{Backoff, RetryPolicy};

/// Upper bound on a single delay when backing off exponentially
const MAX_BACKOFF_DELAY: Duration = Duration::from_secs(30);

/// Routing backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// The routing service at `--api-url`
    Real,
    /// The fixed-outcome mock API at `--mock-url`
    Mock,
}

/// Outcome of the mock submission endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MockSubmit {
    Success,
    #[value(name = "500")]
    ServerError,
}

impl From<MockSubmit> for SubmitOutcome {
    fn from(outcome: MockSubmit) -> Self {
        match outcome {
            MockSubmit::Success => SubmitOutcome::Success,
            MockSubmit::ServerError => SubmitOutcome::ServerError,
        }
    }
}

/// Outcome of the mock status endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MockStatus {
    Success,
    Inprogress,
    Failure,
    #[value(name = "500")]
    ServerError,
}

impl From<MockStatus> for StatusOutcome {
    fn from(outcome: MockStatus) -> Self {
        match outcome {
            MockStatus::Success => StatusOutcome::Success,
            MockStatus::Inprogress => StatusOutcome::InProgress,
            MockStatus::Failure => StatusOutcome::Failure,
            MockStatus::ServerError => StatusOutcome::ServerError,
        }
    }
}

/// Delay growth between polls
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackoffKind {
    Fixed,
    Exponential,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Route endpoint of the routing service
    pub api_url: String,
    pub backend: Backend,
    /// Base URL of the fixed-outcome mock API
    pub mock_url: String,
    pub mock_submit: MockSubmit,
    pub mock_status: MockStatus,
    pub max_retries: u32,
    pub retry_delay_ms: u64,
    pub backoff: BackoffKind,
    /// Per-request timeout; the client default applies when unset
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Retry policy assembled from the polling options
    pub fn retry_policy(&self) -> RetryPolicy {
        let backoff = match self.backoff {
            BackoffKind::Fixed => Backoff::Fixed,
            BackoffKind::Exponential => Backoff::exponential(MAX_BACKOFF_DELAY),
        };

        RetryPolicy::new(self.max_retries, Duration::from_millis(self.retry_delay_ms))
            .with_backoff(backoff)
    }

    /// Build the transport for the selected backend
    ///
    /// # Returns
    /// A boxed transport, or an error if the HTTP client cannot be built
    pub fn transport(&self) -> Result<Box<dyn RouteTransport>> {
        let url = match self.backend {
            Backend::Real => &self.api_url,
            Backend::Mock => &self.mock_url,
        };

        let mut client_config = ClientConfig::new(url.clone());
        if let Some(secs) = self.timeout_secs {
            client_config = client_config.with_timeout(Duration::from_secs(secs));
        }

        let http = client_config
            .build_http_client()
            .context("Failed to build HTTP client")?;

        let transport: Box<dyn RouteTransport> = match self.backend {
            Backend::Real => Box::new(RouteClient::with_client(url.clone(), http)),
            Backend::Mock => Box::new(
                MockApiClient::with_client(url.clone(), http)
                    .with_submit_outcome(self.mock_submit.into())
                    .with_status_outcome(self.mock_status.into()),
            ),
        };

        Ok(transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            api_url: "http://localhost:3000/route".to_string(),
            backend: Backend::Real,
            mock_url: "http://localhost:3000/mock/route".to_string(),
            mock_submit: MockSubmit::Success,
            mock_status: MockStatus::Success,
            max_retries: 5,
            retry_delay_ms: 2000,
            backoff: BackoffKind::Fixed,
            timeout_secs: None,
        }
    }

    #[test]
    fn test_default_retry_policy() {
        assert_eq!(config().retry_policy(), RetryPolicy::default());
    }

    #[test]
    fn test_exponential_retry_policy() {
        let mut config = config();
        config.backoff = BackoffKind::Exponential;
        config.max_retries = 3;
        config.retry_delay_ms = 100;

        let policy = config.retry_policy();

        assert_eq!(policy.max_retries, 3);
        assert_eq!(policy.retry_delay, Duration::from_millis(100));
        assert_eq!(policy.backoff, Backoff::exponential(MAX_BACKOFF_DELAY));
    }

    #[test]
    fn test_mock_outcome_names() {
        assert_eq!(MockSubmit::from_str("500", false).unwrap(), MockSubmit::ServerError);
        assert_eq!(MockStatus::from_str("inprogress", false).unwrap(), MockStatus::Inprogress);
        assert_eq!(
            StatusOutcome::from(MockStatus::Inprogress),
            StatusOutcome::InProgress
        );
        assert_eq!(
            SubmitOutcome::from(MockSubmit::ServerError).as_segment(),
            "500"
        );
    }

    #[test]
    fn test_builds_transport_for_each_backend() {
        let mut config = config();
        assert!(config.transport().is_ok());

        config.backend = Backend::Mock;
        config.timeout_secs = Some(5);
        assert!(config.transport().is_ok());
    }
}
