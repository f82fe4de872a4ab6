//! The todo record and its storage-assigned identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned to a todo item by its storage backend.
///
/// The Handler Layer never inspects this; it round-trips identifiers as
/// opaque strings and each backend parses its own shape. Serialization
/// is untagged, so the wire carries either a hex string (durable
/// backend) or a positive integer (in-memory backend) under the same
/// `id` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    /// 24-character hex form of a document store `ObjectId`.
    Hex(String),
    /// Monotonic counter value from the in-memory backend.
    Serial(u64),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(hex) => f.write_str(hex),
            Self::Serial(serial) => write!(f, "{serial}"),
        }
    }
}

/// A single todo item.
///
/// `id` never changes after creation and is never reassigned to a
/// different live item. `completed` starts `false` and is only ever
/// flipped by the toggle operation; `body` is immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Storage-assigned identifier.
    pub id: TodoId,
    /// Completion flag, toggled by the update operation.
    pub completed: bool,
    /// The item text supplied at creation.
    pub body: String,
}
