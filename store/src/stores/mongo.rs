//! MongoDB-backed todo store.
//!
//! Items live in a single collection; the driver-generated `_id` is the
//! item identifier and stays private to this module — callers only ever
//! see its 24-character hex form.
//!
//! Each operation is one atomic backend command (`find`, `insertOne`,
//! `findAndModify`), so no locking happens at this layer. There is no
//! cross-operation transaction: a concurrent toggle and delete on the
//! same id race at the backend.
//!
//! # Example
//!
//! ```no_run
//! use todo_store::MongoTodoStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MongoTodoStore::connect("mongodb://127.0.0.1:27017", "todos", "todos").await?;
//! # Ok(())
//! # }
//! ```

use crate::error::{Result, StoreError};
use crate::provider::TodoStore;
use crate::todo::{Todo, TodoId};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

/// Storage shape of a todo item.
///
/// `_id` is absent on insert so the backend assigns it.
#[derive(Debug, Serialize, Deserialize)]
struct TodoDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    completed: bool,
    body: String,
}

impl From<TodoDocument> for Todo {
    fn from(document: TodoDocument) -> Self {
        Self {
            id: TodoId::Hex(document.id.map(|oid| oid.to_hex()).unwrap_or_default()),
            completed: document.completed,
            body: document.body,
        }
    }
}

/// Durable todo store backed by a MongoDB collection.
#[derive(Clone)]
pub struct MongoTodoStore {
    collection: Collection<TodoDocument>,
}

impl MongoTodoStore {
    /// Connect to a MongoDB deployment and select the item collection.
    ///
    /// Pings the deployment before returning, so an unreachable backend
    /// fails here rather than on the first request.
    ///
    /// # Errors
    ///
    /// Returns error if the connection string is invalid or the
    /// deployment does not answer the ping.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to create MongoDB client: {e}")))?;

        let db = client.database(database);
        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::Backend(format!("MongoDB ping failed: {e}")))?;

        tracing::info!(database, collection, "Connected to MongoDB");

        Ok(Self {
            collection: db.collection(collection),
        })
    }

    /// Parse an opaque identifier into a document key.
    fn parse_id(id: &str) -> Result<ObjectId> {
        ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
    }
}

#[async_trait]
impl TodoStore for MongoTodoStore {
    async fn list(&self) -> Result<Vec<Todo>> {
        let mut cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to query todos: {e}")))?;

        let mut todos = Vec::new();
        while let Some(document) = cursor
            .try_next()
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to read todo cursor: {e}")))?
        {
            todos.push(document.into());
        }

        Ok(todos)
    }

    async fn create(&self, body: String) -> Result<Todo> {
        let document = TodoDocument {
            id: None,
            completed: false,
            body,
        };

        let inserted = self
            .collection
            .insert_one(&document)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to insert todo: {e}")))?;

        let id = inserted
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Backend("insert did not return an ObjectId".to_string()))?;

        tracing::debug!(id = %id.to_hex(), "Inserted todo");

        Ok(Todo {
            id: TodoId::Hex(id.to_hex()),
            completed: document.completed,
            body: document.body,
        })
    }

    async fn toggle(&self, id: &str) -> Result<Todo> {
        let object_id = Self::parse_id(id)?;

        // Aggregation-pipeline update so the flip reads and writes the
        // flag in one backend command.
        let flip = vec![doc! { "$set": { "completed": { "$not": "$completed" } } }];

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": object_id }, flip)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to update todo: {e}")))?;

        updated.map(Todo::from).ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: &str) -> Result<Todo> {
        let object_id = Self::parse_id(id)?;

        let removed = self
            .collection
            .find_one_and_delete(doc! { "_id": object_id })
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to delete todo: {e}")))?;

        removed.map(Todo::from).ok_or(StoreError::NotFound)
    }
}
