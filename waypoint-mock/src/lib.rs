//! Waypoint Mock
//!
//! A local stand-in for the asynchronous routing service. It accepts route
//! jobs, reports them as in progress for a configurable number of polls and
//! then resolves them deterministically. It also serves the fixed-outcome
//! endpoints of the hosted mock API.
//!
//! Nothing is persisted; jobs live in memory for the lifetime of the process.

pub mod api;
pub mod config;
pub mod service;
pub mod store;

pub use api::create_router;
pub use config::Config;

use store::JobStore;

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: JobStore,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: JobStore::default(),
            config,
        }
    }
}
