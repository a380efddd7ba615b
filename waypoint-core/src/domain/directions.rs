//! Driving-direction plan derived from a computed route
//!
//! A direction renderer wants an origin, a destination and the stopovers in
//! between, all as numbers. The first point of the path is the origin, the
//! last is the destination, and every point in between is a waypoint.

use serde::{Deserialize, Serialize};

use crate::domain::route::{Coordinates, Route};
use crate::error::CoreError;

/// A numeric map position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl TryFrom<&Coordinates> for LatLng {
    type Error = CoreError;

    fn try_from(point: &Coordinates) -> Result<Self, Self::Error> {
        let (lat, lng) = point.to_lat_lng()?;
        Ok(Self { lat, lng })
    }
}

/// Travel mode requested from the direction renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    #[default]
    Driving,
}

/// Request shape for rendering a route as driving directions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsPlan {
    pub origin: LatLng,
    pub destination: LatLng,
    /// Intermediate stopovers, in path order
    pub waypoints: Vec<LatLng>,
    pub travel_mode: TravelMode,
}

impl DirectionsPlan {
    /// Build a plan from a computed route
    ///
    /// A single-point path yields the same origin and destination with no
    /// waypoints. Fails if any coordinate is not numeric.
    pub fn from_route(route: &Route) -> Result<Self, CoreError> {
        let points = route
            .path()
            .iter()
            .map(LatLng::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let (origin, rest) = points.split_first().ok_or(CoreError::EmptyPath)?;
        let (destination, waypoints) = match rest.split_last() {
            Some((last, middle)) => (*last, middle.to_vec()),
            None => (*origin, Vec::new()),
        };

        Ok(Self {
            origin: *origin,
            destination,
            waypoints,
            travel_mode: TravelMode::Driving,
        })
    }
}
