//! Application state shared across HTTP handlers.

use std::sync::Arc;
use todo_store::TodoStore;

/// State handed to every handler.
///
/// Holds the item store behind `Arc<dyn TodoStore>` so the backend is
/// chosen once at startup and the same store is shared by all
/// concurrent requests. Cloned cheaply per request.
#[derive(Clone)]
pub struct AppState {
    /// The item store backing the four routes.
    pub store: Arc<dyn TodoStore>,
}

impl AppState {
    /// Create a new application state around the given store.
    #[must_use]
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }
}
