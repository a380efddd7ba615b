//! Error types for the core domain

use thiserror::Error;

/// Invariant violations detected while building domain values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A coordinate component was not a decimal number
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// A successful route arrived without any points
    #[error("Route path must contain at least one point")]
    EmptyPath,

    /// A failed route arrived without a reason
    #[error("Failure reason must not be empty")]
    EmptyReason,

    /// Distance or time was negative or not finite
    #[error("Invalid {field}: {value}")]
    InvalidTotal {
        /// Name of the offending wire field
        field: &'static str,
        /// The rejected value
        value: f64,
    },
}
