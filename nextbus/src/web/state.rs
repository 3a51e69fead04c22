//! Application state for the web layer.

use std::sync::Arc;

use crate::metro::Backend;
use crate::resolve::NextBus;

/// Shared application state.
///
/// Lookups keep nothing between requests; the state only carries the
/// gateway they fetch through.
#[derive(Clone)]
pub struct AppState {
    /// Resolver over the configured NexTrip backend
    pub nextbus: Arc<NextBus<Backend>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(backend: Backend) -> Self {
        Self {
            nextbus: Arc::new(NextBus::new(backend)),
        }
    }
}
