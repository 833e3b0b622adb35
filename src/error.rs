//! Error types for the content service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::content::GenerationResponse;

/// Result type alias for content service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for content service operations
#[derive(Debug, Error)]
pub enum Error {
    /// Required input absent or malformed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Request body could not be decoded
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Project or content item does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration could not be loaded or rendered
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status used when this error reaches the request boundary
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body.
    ///
    /// Client-facing errors carry their own message verbatim.
    pub fn client_message(&self) -> String {
        match self {
            Error::Validation(message) | Error::InvalidJson(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }

        (status, Json(GenerationResponse::failure(self.client_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            Error::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::InvalidJson("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::Config("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_message_is_verbatim_for_validation() {
        let err = Error::Validation("Missing required fields: title, type, topic".into());
        assert_eq!(
            err.client_message(),
            "Missing required fields: title, type, topic"
        );
        assert!(err.to_string().starts_with("Validation error"));
    }

    #[test]
    fn test_error_response_status() {
        let response = Error::NotFound("project abc".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
