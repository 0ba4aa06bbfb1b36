//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.
//!
//! Clients only ever see a fixed message; the full error is logged
//! together with a request id.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::storage::StorageError;

/// Client message for rejected append payloads
pub const MISSING_FIELDS_MESSAGE: &str = "Text and timestamp are required";
/// Client message for bodies over the configured size limit
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Request entity too large";
/// Client message when the collection cannot be read
pub const READ_FAILED_MESSAGE: &str = "Failed to read wishes";
/// Client message when a new wish cannot be persisted
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save wish";

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request payload missing required fields
    #[error("Validation error: {0}")]
    Validation(String),

    /// Request body exceeds the configured size limit
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Collection could not be loaded for a JSON response
    #[error("Failed to read wishes: {0}")]
    ReadWishes(#[source] StorageError),

    /// New wish could not be persisted
    #[error("Failed to save wish: {0}")]
    SaveWish(#[source] StorageError),

    /// Collection could not be loaded for the HTML dashboard
    #[error("Failed to render dashboard: {0}")]
    Dashboard(#[source] StorageError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::ReadWishes(_)
            | ApiError::SaveWish(_)
            | ApiError::Dashboard(_)
            | ApiError::Internal(_)
            | ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed message exposed to the client
    pub fn client_message(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => MISSING_FIELDS_MESSAGE,
            ApiError::PayloadTooLarge(_) => PAYLOAD_TOO_LARGE_MESSAGE,
            ApiError::ReadWishes(_) | ApiError::Dashboard(_) => READ_FAILED_MESSAGE,
            ApiError::SaveWish(_) => SAVE_FAILED_MESSAGE,
            ApiError::Internal(_) | ApiError::Io(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let request_id = uuid::Uuid::new_v4().to_string();

        // Log the error
        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id,
                status = status.as_u16(),
                error_message = %self,
                "API error occurred"
            );
        } else {
            tracing::warn!(
                request_id = %request_id,
                status = status.as_u16(),
                error_message = %self,
                "Request rejected"
            );
        }

        match self {
            // The dashboard is a page, not an API consumer
            ApiError::Dashboard(_) => (status, self.client_message()).into_response(),
            _ => {
                let body = ErrorResponse {
                    error: self.client_message().to_string(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    fn read_error() -> StorageError {
        StorageError::Read {
            path: "wishes.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation("missing text".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::PayloadTooLarge("length limit exceeded".into()).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ApiError::ReadWishes(read_error()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::SaveWish(read_error()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_message_hides_detail() {
        let err = ApiError::SaveWish(read_error());
        assert_eq!(err.client_message(), "Failed to save wish");
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_dashboard_error_is_plain_text() {
        let response = ApiError::Dashboard(read_error()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
    }

    #[test]
    fn test_api_error_is_json() {
        let response = ApiError::ReadWishes(read_error()).into_response();
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert_eq!(content_type, "application/json");
    }
}
