//! Application state for the HTTP server.

use std::sync::Arc;
use std::time::Duration;

use crate::ephemeris::Ephemeris;

/// Default upper bound for a single ephemeris computation.
pub const DEFAULT_COMPUTATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Ephemeris backend, configured once at startup
    pub ephemeris: Arc<dyn Ephemeris>,
    /// Limit applied to each blocking computation
    pub computation_timeout: Duration,
}

impl AppState {
    /// Create a new application state with the given ephemeris backend.
    pub fn new(ephemeris: Arc<dyn Ephemeris>) -> Self {
        Self {
            ephemeris,
            computation_timeout: DEFAULT_COMPUTATION_TIMEOUT,
        }
    }

    pub fn with_computation_timeout(mut self, timeout: Duration) -> Self {
        self.computation_timeout = timeout;
        self
    }
}
