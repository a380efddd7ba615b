//! Core domain types
//!
//! This module contains the structures shared by the client, the CLI and the
//! mock routing service. They describe one routing job from the moment it is
//! submitted until it reaches a terminal state.

pub mod directions;
pub mod policy;
pub mod route;
