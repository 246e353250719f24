//! Application state shared across handlers.

use std::sync::Arc;

use basket_core::BasketStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Every handler sees the same
/// basket store, so one server process is one basket domain.
#[derive(Clone, Default)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Default)]
struct AppStateInner {
    store: BasketStore,
}

impl AppState {
    /// Create application state around an empty basket store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create application state around an existing store.
    #[must_use]
    pub fn with_store(store: BasketStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store }),
        }
    }

    /// Get a reference to the basket store.
    #[must_use]
    pub fn store(&self) -> &BasketStore {
        &self.inner.store
    }
}
