//! # Todo Item Store
//!
//! Persistence abstraction behind the todo HTTP API.
//!
//! The [`TodoStore`] trait exposes the four operations the API needs
//! (list, create, toggle, delete) over two interchangeable backends:
//!
//! - [`MongoTodoStore`]: durable storage in a MongoDB collection, one
//!   atomic backend call per operation.
//! - [`MemoryTodoStore`]: a process-lifetime, mutex-guarded list for
//!   running without external infrastructure.
//!
//! Handlers treat item identifiers as opaque strings; each backend owns
//! the parsing and validation of its own identifier shape.

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

pub mod error;
pub mod provider;
pub mod stores;
pub mod todo;

// Re-export main types for convenience
pub use error::{Result, StoreError};
pub use provider::TodoStore;
pub use stores::{MemoryTodoStore, MongoTodoStore};
pub use todo::{Todo, TodoId};
