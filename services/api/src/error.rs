//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the API service
///
/// Every variant maps to the `{success: false, error, details?}` envelope
/// the client expects; nothing beyond those fields crosses the wire.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or malformed fields on a create request
    #[error("Validation failed")]
    Validation { details: Vec<String> },

    /// Unknown id on get/delete/like
    #[error("{0}")]
    NotFound(String),

    /// Underlying storage failure
    #[error("{context}")]
    Store { context: String, details: String },
}

impl ApiError {
    /// Wrap a repository failure with the human-readable context the
    /// envelope carries as `error`.
    pub fn store(context: &str, err: anyhow::Error) -> Self {
        ApiError::Store {
            context: context.to_string(),
            details: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation { details } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "success": false,
                    "error": "Validation failed",
                    "details": details,
                }),
            ),
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({
                    "success": false,
                    "error": msg,
                }),
            ),
            ApiError::Store { context, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "success": false,
                    "error": context,
                    "details": details,
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_validation_error_status() {
        let err = ApiError::Validation {
            details: vec!["title".to_string()],
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_status() {
        let err = ApiError::NotFound("Recipe not found".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_error_status() {
        let err = ApiError::store("Failed to fetch recipes", anyhow::anyhow!("boom"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
