//! Router configuration for the todo API.

use crate::handlers::todos;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

/// Build the complete Axum router.
///
/// Wires the four API routes to their handlers and attaches request
/// tracing. Unmatched paths and methods fall through to Axum's default
/// 404/405 responses.
///
/// # Arguments
///
/// - `state`: Application state to share with handlers
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/getData", get(todos::get_data))
        .route("/addTodo", post(todos::add_todo))
        .route("/updateTodo/:id", put(todos::update_todo))
        .route("/deleteTodo/:id", delete(todos::delete_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
