//! Roster API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Roster API errors.
#[derive(Debug, Error)]
pub enum ApiRosterError {
    #[error("Student not found")]
    StudentNotFound,

    #[error("Group not found")]
    GroupNotFound,

    #[error("Student is not a member of the source group")]
    NotAMember,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response structure for API responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ApiRosterError {
    /// Get the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiRosterError::StudentNotFound => "student_not_found",
            ApiRosterError::GroupNotFound => "group_not_found",
            ApiRosterError::NotAMember => "not_a_member",
            ApiRosterError::Validation(_) => "validation_error",
            ApiRosterError::Database(_) => "database_error",
        }
    }

    /// Get the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiRosterError::StudentNotFound => StatusCode::NOT_FOUND,
            ApiRosterError::GroupNotFound => StatusCode::NOT_FOUND,
            ApiRosterError::NotAMember => StatusCode::BAD_REQUEST,
            ApiRosterError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiRosterError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiRosterError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            ApiRosterError::Database(e) => {
                tracing::error!("Roster database error: {:?}", e);
                "A database error occurred".to_string()
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse {
            error: self.error_code().to_string(),
            message,
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            ApiRosterError::StudentNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiRosterError::GroupNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiRosterError::NotAMember.status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
