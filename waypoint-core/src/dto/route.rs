//! Route submission DTOs

use serde::{Deserialize, Serialize};

use crate::domain::route::JobHandle;

/// Request to submit a new routing job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Address of the pickup point
    pub origin: String,
    /// Address of the drop-off point
    pub destination: String,
}

impl RouteRequest {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// Response to a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub token: JobHandle,
}
