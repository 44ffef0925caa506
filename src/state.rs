//! Shared application state for all routes.

use crate::store::ArticleStore;
use std::sync::Arc;

/// Constructed once at startup and cloned into every handler. The store is
/// the only shared resource; handlers hold no other state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ArticleStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        AppState { store }
    }
}
