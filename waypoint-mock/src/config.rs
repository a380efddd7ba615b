//! Mock service configuration
//!
//! Bind address and job pacing, read from the environment with defaults.

/// Default bind address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Default number of polls a job reports as in progress
pub const DEFAULT_PENDING_POLLS: u32 = 1;

/// Mock service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// How many status polls report `in progress` before the job resolves
    pub pending_polls: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            pending_polls: DEFAULT_PENDING_POLLS,
        }
    }
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - WAYPOINT_MOCK_BIND_ADDR (optional, default: 0.0.0.0:3000)
    /// - WAYPOINT_MOCK_PENDING_POLLS (optional, default: 1)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = std::env::var("WAYPOINT_MOCK_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let pending_polls = match std::env::var("WAYPOINT_MOCK_PENDING_POLLS") {
            Ok(raw) => raw.parse::<u32>().map_err(|e| {
                anyhow::anyhow!("WAYPOINT_MOCK_PENDING_POLLS must be a number: {}", e)
            })?,
            Err(_) => DEFAULT_PENDING_POLLS,
        };

        Ok(Self {
            bind_addr,
            pending_polls,
        })
    }

    /// Sets the number of in-progress polls
    pub fn with_pending_polls(mut self, pending_polls: u32) -> Self {
        self.pending_polls = pending_polls;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if !self.bind_addr.contains(':') {
            anyhow::bail!("bind_addr must include a port");
        }

        Ok(())
    }
}
