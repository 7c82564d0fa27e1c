//! Error handling utilities for API responses.
//!
//! Provides the standard error body and the conversion between service-layer
//! errors and HTTP responses. Every failed request returns `{"error": msg}`;
//! all credential failures share the single message "Unauthorized" so the
//! response never reveals which validation step rejected the caller.

use crate::errors::ServiceError;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Standard error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Builds an error response with the standard JSON body.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> (StatusCode, String) {
    let body = ErrorBody {
        error: message.into(),
    };
    (status, serde_json::to_string(&body).unwrap_or_default())
}

/// Converts ServiceError to the appropriate HTTP response.
pub fn service_error_to_http(error: ServiceError) -> (StatusCode, String) {
    let (status, message) = match error {
        ServiceError::Validation { message } => (StatusCode::BAD_REQUEST, message),
        ServiceError::NotFound { entity, identifier } => (
            StatusCode::NOT_FOUND,
            format!("{} '{}' not found", entity, identifier),
        ),
        ServiceError::AlreadyExists { entity, identifier } => (
            StatusCode::CONFLICT,
            format!("{} '{}' already exists", entity, identifier),
        ),
        ServiceError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
        ServiceError::PermissionDenied { message } => (StatusCode::FORBIDDEN, message),
        ServiceError::InvalidOperation { message } => (StatusCode::BAD_REQUEST, message),
        ServiceError::Database { source } => {
            tracing::error!("Database error: {}", source);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
        ServiceError::InternalError { message } => {
            tracing::error!("Internal error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    };

    error_response(status, message)
}

/// Formats validator errors into one comma-separated message.
pub fn validation_errors_to_message(errors: validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                format!(
                    "{}: {}",
                    field,
                    error.message.as_ref().unwrap_or(&"Invalid value".into())
                )
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
