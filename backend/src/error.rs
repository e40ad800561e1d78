use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: String,
        details: Vec<FieldError>,
    },

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Vec<FieldError>) -> Self {
        AppError::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Repository(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A single failing input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation { message, details } => ErrorResponse {
                error: message,
                details: Some(details),
            },
            AppError::NotFound(message) => ErrorResponse::new(message),
            other => {
                error!("request failed: {}", other);
                ErrorResponse::new(other.to_string())
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_error_kind() {
        assert_eq!(
            AppError::validation("Validation error", vec![]).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("Todo not found".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(RepositoryError::RecordNotFound { operation: "delete" }).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn repository_message_is_exposed_verbatim() {
        let err = AppError::from(RepositoryError::RecordNotFound { operation: "update" });
        assert_eq!(err.to_string(), "Record to update not found.");
    }

    #[test]
    fn details_are_omitted_when_absent() {
        let body = serde_json::to_value(ErrorResponse::new("Todo not found")).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Todo not found" }));
    }
}
