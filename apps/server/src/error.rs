//! Server error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use user_store::{StoreError, UniqueField};

/// Fixed message for any failure the caller cannot act on.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong, try again later.";

/// Server error type.
///
/// Every variant renders as `{"message": ...}` JSON; nothing propagates
/// past the handler boundary. Client faults are all 400 to match the wire
/// contract of the API's consumers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Field validation failed; the message is already user-facing.
    #[error("{0}")]
    Validation(String),

    /// The path identifier does not parse as a UUID.
    #[error("Id is not valid.")]
    InvalidId,

    /// No record matched; the message names the failed operation.
    #[error("{0}")]
    NotFound(&'static str),

    /// A uniqueness constraint on phone number or email was violated.
    #[error("duplicate value for {}", .0.wire_name())]
    Duplicate(UniqueField),

    /// Unexpected store failure; the cause is logged, never exposed.
    #[error("internal error: {0}")]
    Internal(StoreError),
}

impl ApiError {
    /// Maps a store error to a response, naming the operation that failed
    /// when the record is missing.
    pub fn from_store(err: StoreError, not_found_message: &'static str) -> Self {
        match err {
            StoreError::Duplicate { field } => ApiError::Duplicate(field),
            StoreError::NotFound { .. } => ApiError::NotFound(not_found_message),
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::InvalidId => (StatusCode::BAD_REQUEST, "Id is not valid.".to_string()),
            ApiError::NotFound(message) => (StatusCode::BAD_REQUEST, message.to_string()),
            ApiError::Duplicate(field) => (
                StatusCode::BAD_REQUEST,
                format!(
                    "Duplicate value entered for {} field, please choose another value",
                    field.wire_name()
                ),
            ),
            ApiError::Internal(cause) => {
                tracing::error!(error = %cause, "Unexpected store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = json!({ "message": message });

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handler operations.
pub type ApiResult<T> = Result<T, ApiError>;
