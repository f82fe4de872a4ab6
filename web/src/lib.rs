//! # Todo HTTP API
//!
//! The Handler Layer of the todo service: four REST routes translated
//! into [`todo_store::TodoStore`] calls and JSON payloads.
//!
//! ## Routes
//!
//! - `GET /getData` - List all todo items
//! - `POST /addTodo` - Create a todo item
//! - `PUT /updateTodo/:id` - Toggle an item's completion flag
//! - `DELETE /deleteTodo/:id` - Remove an item
//!
//! Every failure is converted to an HTTP status plus JSON error body at
//! this boundary; nothing propagates further.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use todo_store::MemoryTodoStore;
//! use todo_web::{build_router, AppState};
//!
//! let state = AppState::new(Arc::new(MemoryTodoStore::new()));
//! let app = build_router(state);
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export main types for convenience
pub use config::{Backend, Config};
pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
