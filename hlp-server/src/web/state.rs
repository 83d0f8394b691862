//! Application state for the web layer.

use std::sync::Arc;

use crate::index::RouteIndex;

/// Shared application state.
///
/// The index (and the catalog behind it) is built before the server starts
/// and never mutated, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Route lookup index over the loaded catalog.
    pub index: Arc<RouteIndex>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(index: RouteIndex) -> Self {
        Self {
            index: Arc::new(index),
        }
    }
}
