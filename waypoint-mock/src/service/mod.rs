//! Service Module
//!
//! Business logic layer for the mock routing service.
//! Services own job bookkeeping and decide what each poll reports.

pub mod route;

// Re-export for convenience
pub use route as route_service;
