//! Application state for the API server

use std::{sync::Arc, time::Instant};

use quill_application::Mediator;

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    /// Dispatches every blog command and query
    pub mediator: Arc<Mediator>,
    /// Server start time for uptime calculation
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(mediator: Mediator) -> Self {
        Self {
            mediator: Arc::new(mediator),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
