//! Waypoint Core
//!
//! Core types for the Waypoint route resolution system.
//!
//! This crate contains:
//! - Domain types: route jobs, their status union and the retry policy
//! - DTOs: request/response bodies exchanged with the routing service
//!
//! Nothing in here performs I/O. Transport and polling live in `waypoint-client`.

pub mod domain;
pub mod dto;
pub mod error;

pub use error::CoreError;
