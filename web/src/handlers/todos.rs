//! Todo API endpoints.
//!
//! Four thin adapters over the item store:
//! - `GET /getData` - list all items
//! - `POST /addTodo` - create an item
//! - `PUT /updateTodo/:id` - toggle an item's completion flag
//! - `DELETE /deleteTodo/:id` - remove an item
//!
//! Identifiers are passed through as opaque strings; the store decides
//! whether they parse.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use todo_store::Todo;

/// Request payload for creating a todo item.
///
/// The decode is tolerant: unknown fields are ignored and a missing
/// `body` defaults to empty, which the handler then rejects. A
/// client-supplied completion flag is deliberately not part of the
/// schema; items always start uncompleted.
#[derive(Debug, Deserialize)]
pub struct AddTodoRequest {
    /// The item text.
    #[serde(default)]
    pub body: String,
}

/// List all todo items.
///
/// # Example
///
/// ```bash
/// curl http://localhost:4000/getData
/// ```
pub async fn get_data(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let todos = state
        .store
        .list()
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to fetch todo items"))?;

    let body = serde_json::to_value(&todos).map_err(|_| ApiError::Encoding)?;
    Ok(Json(body))
}

/// Create a todo item.
///
/// Responds 200 with the created record, including its assigned
/// identifier. An empty or missing `body` field is answered with 200
/// and an error-flag payload rather than a 4xx; existing clients of
/// this API depend on that shape.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:4000/addTodo \
///   -H "Content-Type: application/json" \
///   -d '{"body": "buy milk"}'
/// ```
pub async fn add_todo(
    State(state): State<AppState>,
    payload: Result<Json<AddTodoRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Ok(Json(request)) = payload else {
        return Err(ApiError::InvalidPayload);
    };

    if request.body.is_empty() {
        return Ok((
            StatusCode::OK,
            Json(json!({ "error": "Body field not passed for the todo item" })),
        )
            .into_response());
    }

    let todo = state
        .store
        .create(request.body)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to add todo item"))?;

    tracing::debug!(id = %todo.id, "Created todo");
    Ok(Json(todo).into_response())
}

/// Toggle the completion flag of a todo item.
///
/// Responds 200 with the updated record.
///
/// # Example
///
/// ```bash
/// curl -X PUT http://localhost:4000/updateTodo/662b1f0c9d3e2a4f5b6c7d8e
/// ```
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state
        .store
        .toggle(&id)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to update todo item"))?;

    Ok(Json(todo))
}

/// Remove a todo item.
///
/// Responds 200 with the removed record.
///
/// # Example
///
/// ```bash
/// curl -X DELETE http://localhost:4000/deleteTodo/662b1f0c9d3e2a4f5b6c7d8e
/// ```
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state
        .store
        .delete(&id)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to delete todo item"))?;

    Ok(Json(todo))
}
