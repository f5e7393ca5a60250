//! # HTTP API Errors
//!
//! Error type for the HTTP surface, mapping store and request errors onto
//! status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// HTTP API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body did not match the expected record shape
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Missing required query parameter
    #[error("Missing required parameter: {0}")]
    MissingParam(&'static str),

    /// Anything the write path or read façade reports
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingParam(_) => StatusCode::BAD_REQUEST,

            ApiError::Store(store_err) => match store_err {
                // Validation rejects before any persistence
                StoreError::Validation(_) => StatusCode::BAD_REQUEST,
                StoreError::NotFound => StatusCode::NOT_FOUND,
                StoreError::InvalidUpdate => StatusCode::BAD_REQUEST,
                // Delete read-back still found the record
                StoreError::UnexpectedState(_) => StatusCode::INTERNAL_SERVER_ERROR,
                // Collaborator failures are 5xx, never a crash or hang
                StoreError::Storage(_) => StatusCode::BAD_GATEWAY,
                StoreError::Document(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ValidationError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidBody("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Store(StoreError::NotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Store(StoreError::InvalidUpdate).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Store(StoreError::UnexpectedState("k".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_error_keeps_field_tag() {
        let err = ApiError::Store(StoreError::Validation(ValidationError {
            field: "COUNTRY",
            value: "br".to_string(),
        }));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "[COUNTRY] Value br is too short");
    }

    #[test]
    fn test_error_response_body() {
        let response = ErrorResponse::from(ApiError::MissingParam("country"));
        assert_eq!(response.code, 400);
        assert!(response.error.contains("country"));
    }
}
