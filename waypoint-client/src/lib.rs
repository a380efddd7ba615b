//! Waypoint HTTP Client
//!
//! A type-safe client for the asynchronous routing service, plus the polling
//! orchestrator that turns its "submit job, poll for result" contract into a
//! single awaitable call.
//!
//! The crate is organised around the [`RouteTransport`] trait:
//! - [`RouteClient`] talks to the real routing service
//! - [`MockApiClient`] talks to the hosted mock API with fixed outcomes
//! - [`RoutePoller`] drives submit -> poll -> terminal state on top of either
//!
//! # Example
//!
//! ```no_run
//! use waypoint_client::{RouteClient, RoutePoller};
//! use waypoint_core::domain::policy::RetryPolicy;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let poller = RoutePoller::new(RouteClient::new("http://localhost:3000/route"));
//!
//!     let route = poller
//!         .resolve_route(
//!             "Innocentre, Hong Kong",
//!             "Hong Kong International Airport Terminal 1",
//!             &RetryPolicy::default(),
//!         )
//!         .await?;
//!
//!     println!("{} m in {} s", route.total_distance(), route.total_time());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod mock;
pub mod poller;
mod routes;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod transport;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use mock::{MockApiClient, StatusOutcome, SubmitOutcome};
pub use poller::{ResolveError, RoutePoller, resolve_route, resolve_route_with_cancel};
pub use transport::RouteTransport;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the real routing service
///
/// Submissions go to `POST {api_url}` and status polls to
/// `GET {api_url}/{token}`.
#[derive(Debug, Clone)]
pub struct RouteClient {
    /// Base URL of the route endpoint (e.g., "http://localhost:3000/route")
    api_url: String,
    /// HTTP client instance
    client: Client,
}

impl RouteClient {
    /// Create a new route client
    ///
    /// # Arguments
    /// * `api_url` - The route endpoint of the routing service
    ///
    /// # Example
    /// ```
    /// use waypoint_client::RouteClient;
    ///
    /// let client = RouteClient::new("http://localhost:3000/route");
    /// ```
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(api_url, Client::new())
    }

    /// Create a new route client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use waypoint_client::RouteClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = RouteClient::with_client("http://localhost:3000/route", http_client);
    /// ```
    pub fn with_client(api_url: impl Into<String>, client: Client) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a route client from a [`ClientConfig`]
    ///
    /// Fails if the underlying HTTP client cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_client(
            config.api_url.clone(),
            config.build_http_client()?,
        ))
    }

    /// Get the route endpoint URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

// =============================================================================
// Response Handlers
// =============================================================================

/// Check the status code of a response and deserialize its JSON body
///
/// Any non-2xx status becomes [`ClientError::Transport`] carrying the code;
/// a body that does not match `T` becomes [`ClientError::ParseError`].
pub(crate) async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::transport(status.as_u16(), error_text));
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
}
