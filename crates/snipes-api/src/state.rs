//! Shared application state for the API server.
//!
//! [`AppState`] wraps the one [`ScoringStore`] of the process. Handlers
//! take the write lock for the duration of a single store call, so each
//! request is applied in full before the next one sees the store.

use std::sync::Arc;

use snipes_core::ScoringStore;
use tokio::sync::RwLock;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Clone, Default)]
pub struct AppState {
    /// The scoring store.
    pub store: Arc<RwLock<ScoringStore>>,
}

impl AppState {
    /// Wrap an existing store (empty or seeded).
    pub fn new(store: ScoringStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}
