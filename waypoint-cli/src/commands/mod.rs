//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod job;
mod route;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Find a driving route and wait for the result
    Route {
        /// Starting location
        origin: String,
        /// Drop-off point
        destination: String,
    },
    /// Submit a route job and print its token
    Submit {
        /// Starting location
        origin: String,
        /// Drop-off point
        destination: String,
    },
    /// Fetch the current status of a route job once
    Status {
        /// Token returned on submission
        token: String,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
///
/// # Returns
/// Result indicating success or failure
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Route {
            origin,
            destination,
        } => route::handle_route_command(&origin, &destination, config).await,
        Commands::Submit {
            origin,
            destination,
        } => job::submit_job(&origin, &destination, config).await,
        Commands::Status { token } => job::get_job_status(&token, config).await,
    }
}
