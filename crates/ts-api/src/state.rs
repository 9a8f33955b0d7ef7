//! Application state shared across handlers.

use std::sync::Arc;

use ts_core::LoadedCatalog;

/// Shared application state: the immutable catalog snapshot produced by
/// the startup sequence. View state is not held here; it is reconstructed
/// from each request's fragment parameter.
#[derive(Clone)]
pub struct AppState {
    /// Catalog, taxonomy, and terminal init stage.
    pub snapshot: Arc<LoadedCatalog>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(snapshot: LoadedCatalog) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }
}
