//! Waypoint CLI
//!
//! Command-line interface for resolving driving routes through the
//! asynchronous routing service.

mod commands;
mod config;

use std::process::ExitCode;

use clap::Parser;
use colored::*;
use commands::{Commands, handle_command};
use config::{Backend, BackoffKind, Config, MockStatus, MockSubmit};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waypoint_client::config::DEFAULT_API_URL;
use waypoint_client::mock::DEFAULT_MOCK_API_URL;
use waypoint_core::domain::policy::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY};

/// Log filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "waypoint_client=error";

#[derive(Parser)]
#[command(name = "waypoint")]
#[command(about = "Waypoint driving route CLI", long_about = None)]
struct Cli {
    /// Route endpoint of the routing service
    #[arg(long, global = true, env = "WAYPOINT_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Which routing backend to talk to
    #[arg(long, global = true, env = "WAYPOINT_BACKEND", value_enum, default_value_t = Backend::Real)]
    backend: Backend,

    /// Base URL of the fixed-outcome mock API
    #[arg(long, global = true, env = "WAYPOINT_MOCK_URL", default_value = DEFAULT_MOCK_API_URL)]
    mock_url: String,

    /// Outcome of the mock submission endpoint
    #[arg(long, global = true, value_enum, default_value_t = MockSubmit::Success)]
    mock_submit: MockSubmit,

    /// Outcome of the mock status endpoint
    #[arg(long, global = true, value_enum, default_value_t = MockStatus::Success)]
    mock_status: MockStatus,

    /// Maximum number of status polls
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_RETRIES)]
    max_retries: u32,

    /// Delay between status polls in milliseconds
    #[arg(long, global = true, default_value_t = DEFAULT_RETRY_DELAY.as_millis() as u64)]
    retry_delay_ms: u64,

    /// Delay growth between polls
    #[arg(long, global = true, value_enum, default_value_t = BackoffKind::Fixed)]
    backoff: BackoffKind,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        backend: cli.backend,
        mock_url: cli.mock_url,
        mock_submit: cli.mock_submit,
        mock_status: cli.mock_status,
        max_retries: cli.max_retries,
        retry_delay_ms: cli.retry_delay_ms,
        backoff: cli.backoff,
        timeout_secs: cli.timeout_secs,
    };

    match handle_command(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format!("{:#}", err).red());
            ExitCode::FAILURE
        }
    }
}
