// Application state (AppState)

use crate::stores::UserStore;
use std::sync::Arc;

/// Shared application state
///
/// Built once at startup and handed to every handler through axum's `State`.
#[derive(Clone)]
pub struct AppState {
    /// Directory store selected by `storage.backend`
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}
