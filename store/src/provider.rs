//! The item store trait.

use crate::error::Result;
use crate::todo::Todo;
use async_trait::async_trait;

/// Item store.
///
/// This trait abstracts over todo persistence so the HTTP layer can be
/// wired to either backend at startup (`Arc<dyn TodoStore>`). Every
/// operation is independent of the others; concurrent callers are
/// tolerated by each implementation (backend-level atomicity for the
/// durable store, a mutex for the in-memory one).
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Get all stored items.
    ///
    /// The durable backend returns its natural retrieval order; the
    /// in-memory backend returns insertion order. An empty store yields
    /// an empty vec, not an error.
    ///
    /// # Errors
    ///
    /// Returns error if the backend query fails.
    async fn list(&self) -> Result<Vec<Todo>>;

    /// Persist a new item with the given body.
    ///
    /// Assigns a fresh identifier, sets `completed = false`, and returns
    /// the persisted record. Presence-of-body validation is the caller's
    /// concern; the store accepts whatever it is handed.
    ///
    /// # Errors
    ///
    /// Returns error if the backend write fails.
    async fn create(&self, body: String) -> Result<Todo>;

    /// Flip the completion flag of the item with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - No item matches → `StoreError::NotFound`
    /// - The identifier cannot be parsed into the backend's key shape
    ///   → `StoreError::InvalidId` (durable backend only)
    /// - The backend update fails
    async fn toggle(&self, id: &str) -> Result<Todo>;

    /// Remove the item with the given identifier and return it.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - No item matches → `StoreError::NotFound`
    /// - The identifier cannot be parsed into the backend's key shape
    ///   → `StoreError::InvalidId` (durable backend only)
    /// - The backend delete fails
    async fn delete(&self, id: &str) -> Result<Todo>;
}
