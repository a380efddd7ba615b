//! Route job domain types
//!
//! A route job is submitted once, identified by a [`JobHandle`], and polled
//! until its [`RouteStatus`] becomes terminal.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Opaque token identifying one submitted routing job
///
/// Issued by the routing service on submission and only ever passed back to
/// status polls. Serialized as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobHandle(String);

impl JobHandle {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for JobHandle {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for JobHandle {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// A `[latitude, longitude]` pair as sent by the routing service
///
/// Both components stay decimal strings on the wire; use
/// [`Coordinates::to_lat_lng`] when numbers are needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates(pub String, pub String);

impl Coordinates {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self(latitude.into(), longitude.into())
    }

    pub fn latitude(&self) -> &str {
        &self.0
    }

    pub fn longitude(&self) -> &str {
        &self.1
    }

    /// Parse both components into numbers
    pub fn to_lat_lng(&self) -> Result<(f64, f64), CoreError> {
        Ok((parse_component(&self.0)?, parse_component(&self.1)?))
    }
}

fn parse_component(raw: &str) -> Result<f64, CoreError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CoreError::InvalidCoordinate(raw.to_string()))
}

/// A computed driving route
///
/// Only constructible through [`Route::new`] or deserialization, both of
/// which reject an empty path and negative or non-finite totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRoute")]
pub struct Route {
    path: Vec<Coordinates>,
    total_distance: f64,
    total_time: f64,
}

impl Route {
    /// Build a route, checking its invariants
    ///
    /// # Arguments
    /// * `path` - Ordered points of the route, at least one
    /// * `total_distance` - Distance in meters
    /// * `total_time` - Driving time in seconds
    pub fn new(
        path: Vec<Coordinates>,
        total_distance: f64,
        total_time: f64,
    ) -> Result<Self, CoreError> {
        if path.is_empty() {
            return Err(CoreError::EmptyPath);
        }
        check_total("total_distance", total_distance)?;
        check_total("total_time", total_time)?;

        Ok(Self {
            path,
            total_distance,
            total_time,
        })
    }

    pub fn path(&self) -> &[Coordinates] {
        &self.path
    }

    /// Total distance in meters
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Total driving time in seconds
    pub fn total_time(&self) -> f64 {
        self.total_time
    }
}

fn check_total(field: &'static str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidTotal { field, value })
    }
}

#[derive(Deserialize)]
struct RawRoute {
    path: Vec<Coordinates>,
    total_distance: f64,
    total_time: f64,
}

impl TryFrom<RawRoute> for Route {
    type Error = CoreError;

    fn try_from(raw: RawRoute) -> Result<Self, Self::Error> {
        Route::new(raw.path, raw.total_distance, raw.total_time)
    }
}

/// Status of a routing job
///
/// A closed union of the three states the routing service reports. On the
/// wire it is tagged by `"status"`:
///
/// ```json
/// { "status": "in progress" }
/// { "status": "failure", "error": "Location not accessible by car" }
/// { "status": "success", "path": [["22.37", "114.11"]], "total_distance": 20000, "total_time": 1800 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", try_from = "WireStatus")]
pub enum RouteStatus {
    /// Still computing; poll again later
    #[serde(rename = "in progress")]
    Pending,

    /// The service gave up on this job
    #[serde(rename = "failure")]
    Failed {
        #[serde(rename = "error")]
        reason: String,
    },

    /// The route was computed
    #[serde(rename = "success")]
    Succeeded(Route),
}

impl RouteStatus {
    /// Build a `Failed` status, rejecting an empty reason
    pub fn failed(reason: impl Into<String>) -> Result<Self, CoreError> {
        let reason = reason.into();
        if reason.trim().is_empty() {
            return Err(CoreError::EmptyReason);
        }
        Ok(Self::Failed { reason })
    }

    /// Whether this status ends the poll loop
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// The wire tag of this status
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "in progress",
            Self::Failed { .. } => "failure",
            Self::Succeeded(_) => "success",
        }
    }
}

impl std::fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Deserialize)]
#[serde(tag = "status")]
enum WireStatus {
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "failure")]
    Failure { error: String },
    #[serde(rename = "success")]
    Success(Route),
}

impl TryFrom<WireStatus> for RouteStatus {
    type Error = CoreError;

    fn try_from(wire: WireStatus) -> Result<Self, Self::Error> {
        match wire {
            WireStatus::InProgress => Ok(RouteStatus::Pending),
            WireStatus::Failure { error } => RouteStatus::failed(error),
            WireStatus::Success(route) => Ok(RouteStatus::Succeeded(route)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_route() -> Route {
        Route::new(
            vec![
                Coordinates::new("22.372081", "114.107877"),
                Coordinates::new("22.326442", "114.167811"),
            ],
            20000.0,
            1800.0,
        )
        .unwrap()
    }

    #[test]
    fn test_deserialize_in_progress() {
        let status: RouteStatus = serde_json::from_value(json!({ "status": "in progress" })).unwrap();
        assert_eq!(status, RouteStatus::Pending);
        assert!(!status.is_terminal());
    }

    #[test]
    fn test_deserialize_failure() {
        let status: RouteStatus = serde_json::from_value(json!({
            "status": "failure",
            "error": "Location not accessible by car"
        }))
        .unwrap();

        assert_eq!(
            status,
            RouteStatus::Failed {
                reason: "Location not accessible by car".to_string()
            }
        );
        assert!(status.is_terminal());
    }

    #[test]
    fn test_deserialize_success() {
        let status: RouteStatus = serde_json::from_value(json!({
            "status": "success",
            "path": [["22.372081", "114.107877"], ["22.326442", "114.167811"]],
            "total_distance": 20000,
            "total_time": 1800
        }))
        .unwrap();

        assert_eq!(status, RouteStatus::Succeeded(sample_route()));
    }

    #[test]
    fn test_serialize_matches_wire_shape() {
        let value = serde_json::to_value(RouteStatus::Succeeded(sample_route())).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "success",
                "path": [["22.372081", "114.107877"], ["22.326442", "114.167811"]],
                "total_distance": 20000.0,
                "total_time": 1800.0
            })
        );

        let value = serde_json::to_value(RouteStatus::failed("No route").unwrap()).unwrap();
        assert_eq!(value, json!({ "status": "failure", "error": "No route" }));

        let value = serde_json::to_value(RouteStatus::Pending).unwrap();
        assert_eq!(value, json!({ "status": "in progress" }));
    }

    #[test]
    fn test_rejects_empty_path() {
        let result: Result<RouteStatus, _> = serde_json::from_value(json!({
            "status": "success",
            "path": [],
            "total_distance": 0,
            "total_time": 0
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty_reason() {
        let result: Result<RouteStatus, _> =
            serde_json::from_value(json!({ "status": "failure", "error": "  " }));
        assert!(result.is_err());
        assert_eq!(RouteStatus::failed(""), Err(CoreError::EmptyReason));
    }

    #[test]
    fn test_rejects_negative_totals() {
        let result: Result<RouteStatus, _> = serde_json::from_value(json!({
            "status": "success",
            "path": [["22.37", "114.11"]],
            "total_distance": -1,
            "total_time": 10
        }));
        assert!(result.is_err());

        let err = Route::new(vec![Coordinates::new("1", "2")], 1.0, f64::NAN).unwrap_err();
        assert!(matches!(err, CoreError::InvalidTotal { field: "total_time", .. }));
    }

    #[test]
    fn test_rejects_unknown_status() {
        let result: Result<RouteStatus, _> =
            serde_json::from_value(json!({ "status": "cancelled" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_coordinates_parse() {
        let point = Coordinates::new("22.372081", " 114.107877");
        assert_eq!(point.to_lat_lng().unwrap(), (22.372081, 114.107877));

        let bad = Coordinates::new("north", "114.1");
        assert_eq!(
            bad.to_lat_lng(),
            Err(CoreError::InvalidCoordinate("north".to_string()))
        );
    }

    #[test]
    fn test_job_handle_is_transparent() {
        let handle: JobHandle = serde_json::from_value(json!("9d3503e0")).unwrap();
        assert_eq!(handle.as_str(), "9d3503e0");
        assert_eq!(serde_json::to_value(&handle).unwrap(), json!("9d3503e0"));
    }
}
