//! Shared application state for all routes. The store is injected at construction.

use crate::store::BrandStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BrandStore>,
}

impl AppState {
    pub fn new<S: BrandStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &dyn BrandStore {
        self.store.as_ref()
    }
}
