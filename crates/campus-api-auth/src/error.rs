//! Authentication API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Authentication API errors.
///
/// Every variant is terminal for the request it occurs in; nothing here is
/// retried and nothing is fatal to the process.
#[derive(Debug, Error)]
pub enum ApiAuthError {
    #[error("Password does not meet the strength policy")]
    WeakPassword(Vec<String>),

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("User not found")]
    UserNotFound,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for API responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiAuthError {
    /// Get the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiAuthError::WeakPassword(_) => "weak_password",
            ApiAuthError::DuplicateEmail => "duplicate_email",
            ApiAuthError::InvalidCredentials => "invalid_credentials",
            ApiAuthError::InvalidRefreshToken => "invalid_refresh_token",
            ApiAuthError::UserNotFound => "user_not_found",
            ApiAuthError::Validation(_) => "validation_error",
            ApiAuthError::Database(_) => "database_error",
            ApiAuthError::Internal(_) => "internal_error",
        }
    }

    /// Get the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiAuthError::WeakPassword(_) => StatusCode::BAD_REQUEST,
            ApiAuthError::DuplicateEmail => StatusCode::BAD_REQUEST,
            ApiAuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiAuthError::InvalidRefreshToken => StatusCode::UNAUTHORIZED,
            ApiAuthError::UserNotFound => StatusCode::NOT_FOUND,
            ApiAuthError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiAuthError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiAuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiAuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal failure details are logged, never sent to the client.
        let (message, details) = match &self {
            ApiAuthError::Database(e) => {
                tracing::error!("Auth database error: {:?}", e);
                ("A database error occurred".to_string(), None)
            }
            ApiAuthError::Internal(msg) => {
                tracing::error!("Auth internal error: {}", msg);
                ("An internal error occurred".to_string(), None)
            }
            ApiAuthError::WeakPassword(violations) => (
                self.to_string(),
                Some(serde_json::json!({ "violations": violations })),
            ),
            _ => (self.to_string(), None),
        };

        let body = ErrorResponse {
            error: self.error_code().to_string(),
            message,
            details,
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_contract() {
        assert_eq!(
            ApiAuthError::WeakPassword(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiAuthError::DuplicateEmail.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiAuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiAuthError::InvalidRefreshToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiAuthError::UserNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiAuthError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(ApiAuthError::DuplicateEmail.error_code(), "duplicate_email");
        assert_eq!(
            ApiAuthError::InvalidCredentials.error_code(),
            "invalid_credentials"
        );
        assert_eq!(
            ApiAuthError::InvalidRefreshToken.error_code(),
            "invalid_refresh_token"
        );
    }

    #[test]
    fn credentials_error_does_not_reveal_which_check_failed() {
        // Unknown email and wrong password must be indistinguishable.
        let msg = ApiAuthError::InvalidCredentials.to_string();
        assert_eq!(msg, "Invalid email or password");
    }
}
