//! Error types for authentication operations.

use thiserror::Error;

/// Authentication error types.
///
/// Each variant maps to a specific failure mode in token or password
/// handling.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // Token errors
    /// Token has expired (exp claim is in the past).
    #[error("Token has expired")]
    TokenExpired,

    /// Token signature is invalid.
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token format is malformed or invalid.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    // Password errors
    /// Password hashing operation failed.
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

impl AuthError {
    /// Check if this error indicates an expired token.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        matches!(self, AuthError::TokenExpired)
    }

    /// Check if this error is related to token validation.
    #[must_use]
    pub fn is_token_error(&self) -> bool {
        matches!(
            self,
            AuthError::TokenExpired | AuthError::InvalidSignature | AuthError::InvalidToken(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(AuthError::TokenExpired.to_string(), "Token has expired");
        assert_eq!(
            AuthError::InvalidToken("malformed base64".to_string()).to_string(),
            "Invalid token: malformed base64"
        );
    }

    #[test]
    fn is_expired() {
        assert!(AuthError::TokenExpired.is_expired());
        assert!(!AuthError::InvalidSignature.is_expired());
    }

    #[test]
    fn is_token_error() {
        assert!(AuthError::TokenExpired.is_token_error());
        assert!(AuthError::InvalidSignature.is_token_error());
        assert!(!AuthError::HashingFailed("x".to_string()).is_token_error());
    }
}
