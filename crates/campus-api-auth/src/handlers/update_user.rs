//! Profile update endpoint handler.
//!
//! PUT /user/update - Replace a user's email and password.

use crate::error::ApiAuthError;
use crate::handlers::into_validation_error;
use crate::models::{MessageResponse, UpdateUserRequest};
use crate::services::AuthService;
use axum::{Extension, Json};
use std::sync::Arc;
use validator::Validate;

/// Handle a profile update.
#[utoipa::path(
    put,
    path = "/user/update",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 404, description = "User not found"),
    ),
    tag = "auth"
)]
pub async fn update_user_handler(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<MessageResponse>, ApiAuthError> {
    request.validate().map_err(into_validation_error)?;

    auth_service
        .update_user(request.user_id, &request.email, &request.password)
        .await?;

    Ok(Json(MessageResponse::new("User updated successfully")))
}

#[cfg(test)]
mod tests {
    // Handler tests require integration test setup
}
