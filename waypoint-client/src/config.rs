//! Client configuration
//!
//! Connection settings for the routing service.

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;

/// Default route endpoint of a locally running routing service
pub const DEFAULT_API_URL: &str = "http://localhost:3000/route";

/// Default user agent for routing requests
pub const DEFAULT_USER_AGENT: &str = concat!("waypoint/", env!("CARGO_PKG_VERSION"));

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`RouteClient`](crate::RouteClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Route endpoint of the routing service
    pub api_url: String,
    /// Timeout applied to each request
    pub timeout: Duration,
    /// User agent sent with each request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with the given route endpoint
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build a reqwest client honouring these settings
    pub fn build_http_client(&self) -> Result<Client> {
        let client = Client::builder()
            .user_agent(&self.user_agent)
            .connect_timeout(self.timeout)
            .timeout(self.timeout)
            .build()?;
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("waypoint/"));
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("http://example.com/route")
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("test-agent/1.0");

        assert_eq!(config.api_url, "http://example.com/route");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "test-agent/1.0");
        assert!(config.build_http_client().is_ok());
    }
}
