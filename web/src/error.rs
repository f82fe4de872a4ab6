//! Error types for the HTTP handlers.
//!
//! [`ApiError`] bridges store failures and request-level failures into
//! the HTTP status codes and JSON bodies of the API contract, via
//! Axum's `IntoResponse`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use todo_store::StoreError;

/// Failure taxonomy of the HTTP layer.
///
/// Each variant maps to one status + body pair. The `Display` text is
/// the user-facing message embedded in the JSON body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request body was not valid JSON.
    #[error("Invalid request payload")]
    InvalidPayload,

    /// Path identifier could not be parsed by the storage backend.
    #[error("Invalid todo ID provided")]
    InvalidId,

    /// No todo item matches the identifier.
    #[error("Todo not found")]
    NotFound,

    /// The response could not be encoded as JSON.
    #[error("Failed to encode JSON")]
    Encoding,

    /// The storage backend failed.
    #[error("{message}")]
    Internal {
        /// User-facing failure message, specific to the operation.
        message: &'static str,
        /// Backend detail; logged, never exposed to the client.
        detail: String,
    },
}

impl ApiError {
    /// Map a store failure into the HTTP taxonomy.
    ///
    /// `failure` is the operation-specific message used when the
    /// backend itself failed (e.g. "Failed to add todo item").
    #[must_use]
    pub fn from_store(err: StoreError, failure: &'static str) -> Self {
        match err {
            StoreError::NotFound => Self::NotFound,
            StoreError::InvalidId(_) => Self::InvalidId,
            StoreError::Backend(detail) => Self::Internal {
                message: failure,
                detail,
            },
        }
    }

    /// The HTTP status this error responds with.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPayload | Self::InvalidId => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Encoding | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            match &self {
                Self::Internal { message, detail } => {
                    tracing::error!(status = %status, message = %message, detail = %detail, "Request failed");
                }
                other => {
                    tracing::error!(status = %status, error = %other, "Request failed");
                }
            }
        }

        // Not-found keeps its historical "error" key; everything else
        // reports under "message".
        let body = match &self {
            Self::NotFound => json!({ "error": self.to_string() }),
            _ => json!({ "message": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::InvalidPayload.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidId.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Encoding.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_display_is_the_wire_message() {
        assert_eq!(
            ApiError::InvalidPayload.to_string(),
            "Invalid request payload"
        );
        assert_eq!(ApiError::NotFound.to_string(), "Todo not found");
        let internal = ApiError::Internal {
            message: "Failed to add todo item",
            detail: "connection reset".to_string(),
        };
        assert_eq!(internal.to_string(), "Failed to add todo item");
    }

    #[test]
    fn test_from_store_mapping() {
        assert_eq!(
            ApiError::from_store(StoreError::NotFound, "Failed to update todo item"),
            ApiError::NotFound
        );
        assert_eq!(
            ApiError::from_store(
                StoreError::InvalidId("xyz".to_string()),
                "Failed to update todo item"
            ),
            ApiError::InvalidId
        );
        assert_eq!(
            ApiError::from_store(
                StoreError::Backend("io error".to_string()),
                "Failed to delete todo item"
            ),
            ApiError::Internal {
                message: "Failed to delete todo item",
                detail: "io error".to_string(),
            }
        );
    }
}
