//! Logout endpoint handler.
//!
//! POST /logout - Invalidate a token pair.

use crate::error::ApiAuthError;
use crate::models::{LogoutRequest, MessageResponse};
use crate::services::TokenService;
use axum::{Extension, Json};
use std::sync::Arc;

/// Handle user logout.
///
/// Writes both tokens into the revocation registry unconditionally; no
/// check is made that they belong to the given user.
#[utoipa::path(
    post,
    path = "/logout",
    request_body = LogoutRequest,
    responses(
        (status = 200, description = "Logout successful", body = MessageResponse),
    ),
    tag = "auth"
)]
pub async fn logout_handler(
    Extension(token_service): Extension<Arc<TokenService>>,
    Json(request): Json<LogoutRequest>,
) -> Result<Json<MessageResponse>, ApiAuthError> {
    token_service
        .revoke_pair(&request.access_token, &request.refresh_token)
        .await?;

    tracing::info!(user_id = %request.user_id, "User logged out");

    Ok(Json(MessageResponse::new("Logged out successfully")))
}

#[cfg(test)]
mod tests {
    // Handler tests require integration test setup
}
