//! Error types for item store operations.

use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failure modes shared by every store backend.
///
/// Backend driver errors never leak past the store boundary; they are
/// wrapped into [`StoreError::Backend`] where they occur.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No item matches the given identifier.
    #[error("Todo not found")]
    NotFound,

    /// The identifier cannot be parsed into the backend's key shape.
    ///
    /// Only the durable backend produces this: a malformed identifier
    /// string cannot be resolved to a document key. The in-memory
    /// backend reports an unparseable identifier as [`StoreError::NotFound`],
    /// since no stored item can match it.
    #[error("Invalid todo identifier: {0}")]
    InvalidId(String),

    /// The backend rejected or failed the operation.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Returns `true` if this error is due to client-supplied input.
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::NotFound | Self::InvalidId(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(StoreError::NotFound.to_string(), "Todo not found");
        assert_eq!(
            StoreError::InvalidId("abc".to_string()).to_string(),
            "Invalid todo identifier: abc"
        );
    }

    #[test]
    fn test_user_error_classification() {
        assert!(StoreError::NotFound.is_user_error());
        assert!(StoreError::InvalidId(String::new()).is_user_error());
        assert!(!StoreError::Backend("connection reset".to_string()).is_user_error());
    }
}
