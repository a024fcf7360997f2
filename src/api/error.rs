//! API error taxonomy.
//!
//! Every error a handler can produce maps to exactly one HTTP status with
//! a plain-text body. Errors are terminal per request: they are rendered
//! into the response and never propagate further.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced to API clients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No task with the referenced id.
    #[error("Task not found")]
    NotFound,
    /// Request body failed to parse as JSON.
    #[error("Invalid request body")]
    BadRequest,
    /// Request method does not match any handler on this path.
    #[error("Invalid request method")]
    MethodNotAllowed,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::BadRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn test_messages_match_wire_contract() {
        assert_eq!(ApiError::NotFound.to_string(), "Task not found");
        assert_eq!(ApiError::BadRequest.to_string(), "Invalid request body");
        assert_eq!(
            ApiError::MethodNotAllowed.to_string(),
            "Invalid request method"
        );
    }
}
