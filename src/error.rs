//! Error types for the blogsmith service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Result type alias for blogsmith operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for blog post generation
#[derive(Debug, Error)]
pub enum Error {
    /// Request failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status code reported to the caller
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Flat error message exposed in the response body. Internal details are
    /// logged server-side only and never reach the client.
    fn client_message(&self) -> String {
        match self {
            Error::Validation(message) => message.clone(),
            _ => "Failed to generate blog post".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Error generating blog post: {}", self);
        }
        (status, Json(json!({ "error": self.client_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_400() {
        let err = Error::Validation("Topic is required".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.client_message(), "Topic is required");
    }

    #[test]
    fn test_other_errors_map_to_500_with_generic_message() {
        let json_err: Error = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert_eq!(json_err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_err.client_message(), "Failed to generate blog post");

        let io_err: Error = std::io::Error::new(std::io::ErrorKind::Other, "bind failed").into();
        assert_eq!(io_err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(io_err.client_message(), "Failed to generate blog post");

        let config_err = Error::Config("bad bind_addr".to_string());
        assert_eq!(config_err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(config_err.client_message(), "Failed to generate blog post");
    }
}
