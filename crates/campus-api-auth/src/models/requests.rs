//! Request DTOs for authentication endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Registration request payload.
///
/// The password strength policy is checked by the session service, not
/// here; this layer only bounds sizes and checks the email shape.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// User email address.
    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email too long")
    )]
    pub email: String,

    /// User password.
    #[validate(length(min = 1, max = 128, message = "Password must be 1-128 characters"))]
    pub password: String,
}

/// Login request payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User email address.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// User password.
    /// Length validation prevents DoS via extremely long passwords that
    /// would consume excessive CPU during hashing.
    #[validate(length(min = 1, max = 1024, message = "Password must be 1-1024 characters"))]
    pub password: String,
}

/// Token refresh request payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RefreshRequest {
    /// Refresh token from the login response.
    pub refresh_token: String,
}

/// Logout request payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogoutRequest {
    /// The user logging out.
    pub user_id: Uuid,

    /// Access token to invalidate.
    pub access_token: String,

    /// Refresh token to invalidate.
    pub refresh_token: String,
}

/// Profile update request payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// The user to update.
    pub user_id: Uuid,

    /// New email address.
    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email too long")
    )]
    pub email: String,

    /// New password.
    #[validate(length(min = 1, max = 128, message = "Password must be 1-128 characters"))]
    pub password: String,
}

/// Query parameters for the login history endpoint.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct HistoryQuery {
    /// The user whose history to fetch.
    pub user_id: Uuid,
}
