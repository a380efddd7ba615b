//! Job command handlers
//!
//! Single-step access to the routing service: submit a job, or look at a
//! job's status once.

use anyhow::{Context, Result};
use colored::*;
use waypoint_client::RouteTransport;
use waypoint_core::domain::route::{JobHandle, RouteStatus};

use super::route::{print_route, validate_form};
use crate::config::Config;

/// Submit a route job and print its token
pub async fn submit_job(origin: &str, destination: &str, config: &Config) -> Result<()> {
    validate_form(origin, destination)?;

    let transport = config.transport()?;
    let handle = transport
        .submit_job(origin, destination)
        .await
        .context("Failed to submit route job")?;

    println!("{}", "✓ Route job submitted".green());
    println!("  Token: {}", handle.to_string().cyan());

    Ok(())
}

/// Fetch and print a job's status once
pub async fn get_job_status(token: &str, config: &Config) -> Result<()> {
    let transport = config.transport()?;
    let handle = JobHandle::from(token);

    let status = transport
        .fetch_job_status(&handle)
        .await
        .with_context(|| format!("Failed to fetch status of {}", handle))?;

    println!("Status: {}", colorize_status(&status));

    match &status {
        RouteStatus::Pending => {
            println!("{}", "  Still computing, try again shortly.".dimmed());
        }
        RouteStatus::Failed { reason } => println!("  Reason: {}", reason.red()),
        RouteStatus::Succeeded(route) => {
            println!();
            print_route(route);
        }
    }

    Ok(())
}

/// Colorize a job status for display
fn colorize_status(status: &RouteStatus) -> ColoredString {
    let label = status.label();
    match status {
        RouteStatus::Pending => label.yellow(),
        RouteStatus::Failed { .. } => label.red(),
        RouteStatus::Succeeded(_) => label.green(),
    }
}
