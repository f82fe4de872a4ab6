//! In-memory todo store.
//!
//! A process-lifetime, insertion-ordered list guarded by a mutex. Clones
//! share the same underlying list, so the store can be handed to every
//! request handler. Nothing survives a restart.
//!
//! Identifiers come from a monotonically increasing counter and are
//! never reused, even after deletions, so a stale identifier can never
//! resolve to a different item.

use crate::error::{Result, StoreError};
use crate::provider::TodoStore;
use crate::todo::{Todo, TodoId};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Inner {
    todos: Vec<Todo>,
    next_id: u64,
}

/// Volatile todo store holding items in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryTodoStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryTodoStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Backend("todo list mutex poisoned".to_string()))
    }

    /// Resolve an opaque identifier against the counter shape.
    ///
    /// An unparseable identifier cannot match any stored item, so it is
    /// reported as not-found rather than invalid (the invalid-identifier
    /// failure mode belongs to the durable backend's key parsing).
    fn parse_id(id: &str) -> Result<u64> {
        id.parse::<u64>().map_err(|_| StoreError::NotFound)
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn list(&self) -> Result<Vec<Todo>> {
        Ok(self.lock()?.todos.clone())
    }

    async fn create(&self, body: String) -> Result<Todo> {
        let mut inner = self.lock()?;
        inner.next_id += 1;

        let todo = Todo {
            id: TodoId::Serial(inner.next_id),
            completed: false,
            body,
        };
        inner.todos.push(todo.clone());

        Ok(todo)
    }

    async fn toggle(&self, id: &str) -> Result<Todo> {
        let serial = Self::parse_id(id)?;
        let mut inner = self.lock()?;

        let todo = inner
            .todos
            .iter_mut()
            .find(|todo| todo.id == TodoId::Serial(serial))
            .ok_or(StoreError::NotFound)?;

        todo.completed = !todo.completed;
        Ok(todo.clone())
    }

    async fn delete(&self, id: &str) -> Result<Todo> {
        let serial = Self::parse_id(id)?;
        let mut inner = self.lock()?;

        let position = inner
            .todos
            .iter()
            .position(|todo| todo.id == TodoId::Serial(serial))
            .ok_or(StoreError::NotFound)?;

        Ok(inner.todos.remove(position))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_list() {
        let store = MemoryTodoStore::new();
        let created = store.create("buy milk".to_string()).await.unwrap();

        let todos = store.list().await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0], created);
        assert_eq!(todos[0].id, TodoId::Serial(1));
        assert!(!todos[0].completed);
        assert_eq!(todos[0].body, "buy milk");
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = MemoryTodoStore::new();
        for body in ["first", "second", "third"] {
            store.create(body.to_string()).await.unwrap();
        }

        let bodies: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|todo| todo.body)
            .collect();
        assert_eq!(bodies, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_toggle_pair_restores_original_flag() {
        let store = MemoryTodoStore::new();
        let created = store.create("water plants".to_string()).await.unwrap();
        let id = created.id.to_string();

        let once = store.toggle(&id).await.unwrap();
        assert!(once.completed);

        let twice = store.toggle(&id).await.unwrap();
        assert!(!twice.completed);
        assert_eq!(twice, created);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let store = MemoryTodoStore::new();
        let first = store.create("first".to_string()).await.unwrap();
        store.create("second".to_string()).await.unwrap();

        let removed = store.delete(&first.id.to_string()).await.unwrap();
        assert_eq!(removed, first);

        let todos = store.list().await.unwrap();
        assert_eq!(todos.len(), 1);
        assert!(todos.iter().all(|todo| todo.id != first.id));
    }

    #[tokio::test]
    async fn test_missing_id_leaves_store_unchanged() {
        let store = MemoryTodoStore::new();
        store.create("only".to_string()).await.unwrap();

        assert_eq!(store.toggle("99").await, Err(StoreError::NotFound));
        assert_eq!(store.delete("99").await, Err(StoreError::NotFound));
        // A non-numeric id cannot match any counter value.
        assert_eq!(store.toggle("abc").await, Err(StoreError::NotFound));

        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_ids_are_never_reused_after_delete() {
        let store = MemoryTodoStore::new();
        store.create("first".to_string()).await.unwrap();
        let second = store.create("second".to_string()).await.unwrap();
        store.delete(&second.id.to_string()).await.unwrap();

        let third = store.create("third".to_string()).await.unwrap();
        assert_eq!(third.id, TodoId::Serial(3));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryTodoStore::new();
        let clone = store.clone();
        store.create("shared".to_string()).await.unwrap();

        assert_eq!(clone.list().await.unwrap().len(), 1);
    }
}
