//! Route command handler
//!
//! Validates the form input, resolves the route and prints the result.

use anyhow::{Result, bail};
use colored::*;
use tokio_util::sync::CancellationToken;
use waypoint_client::resolve_route_with_cancel;
use waypoint_core::domain::directions::DirectionsPlan;
use waypoint_core::domain::route::Route;

use crate::config::Config;

/// Handle the route command
///
/// Ctrl-C while waiting abandons the resolution.
///
/// # Arguments
/// * `origin` - Starting location as typed by the user
/// * `destination` - Drop-off point as typed by the user
/// * `config` - The CLI configuration
pub async fn handle_route_command(origin: &str, destination: &str, config: &Config) -> Result<()> {
    validate_form(origin, destination)?;

    let transport = config.transport()?;
    let policy = config.retry_policy();

    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            interrupt.cancel();
        }
    });

    println!(
        "{}",
        format!("Finding a route from {} to {}...", origin, destination).dimmed()
    );

    let route =
        resolve_route_with_cancel(transport.as_ref(), origin, destination, &policy, &cancel)
            .await?;

    print_route(&route);

    Ok(())
}

/// Check that both form fields hold something other than whitespace
pub fn validate_form(origin: &str, destination: &str) -> Result<()> {
    if origin.trim().is_empty() {
        bail!("Starting location is required");
    }

    if destination.trim().is_empty() {
        bail!("Drop-off point is required");
    }

    Ok(())
}

/// Print a resolved route with its directions plan
pub fn print_route(route: &Route) {
    println!("{}", "✓ Route found".green().bold());
    println!(
        "  Total distance: {}",
        format_distance(route.total_distance()).cyan()
    );
    println!("  Total time:     {}", format_duration(route.total_time()).cyan());

    println!("\n{}", "Path:".bold());
    for (index, point) in route.path().iter().enumerate() {
        println!(
            "  {} {}, {}",
            format!("{}.", index + 1).dimmed(),
            point.latitude(),
            point.longitude()
        );
    }

    match DirectionsPlan::from_route(route) {
        Ok(plan) => {
            println!("\n{}", "Directions plan:".bold());
            match serde_json::to_string_pretty(&plan) {
                Ok(pretty) => println!("{}", pretty),
                Err(_) => println!("{:?}", plan),
            }
        }
        Err(err) => {
            println!(
                "\n{}",
                format!("⚠ Directions unavailable: {}", err).yellow()
            );
        }
    }
}

/// Meters as kilometers with one decimal
pub fn format_distance(meters: f64) -> String {
    format!("{:.1} km", meters / 1000.0)
}

/// Seconds as whole minutes
pub fn format_duration(seconds: f64) -> String {
    format!("{:.0} min", seconds / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_form() {
        assert!(validate_form("Innocentre", "Airport").is_ok());
    }

    #[test]
    fn test_missing_origin() {
        let err = validate_form("   ", "Airport").unwrap_err();
        assert_eq!(err.to_string(), "Starting location is required");
    }

    #[test]
    fn test_missing_destination() {
        let err = validate_form("Innocentre", "").unwrap_err();
        assert_eq!(err.to_string(), "Drop-off point is required");
    }

    #[test]
    fn test_origin_checked_first() {
        let err = validate_form("", "").unwrap_err();
        assert_eq!(err.to_string(), "Starting location is required");
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(20000.0), "20.0 km");
        assert_eq!(format_distance(1340.0), "1.3 km");
        assert_eq!(format_distance(0.0), "0.0 km");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(1800.0), "30 min");
        assert_eq!(format_duration(100.0), "2 min");
    }
}
