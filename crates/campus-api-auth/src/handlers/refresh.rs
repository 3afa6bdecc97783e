//! Token refresh endpoint handler.
//!
//! POST /refresh - Mint a new access token from a refresh token.

use crate::error::ApiAuthError;
use crate::models::{RefreshRequest, RefreshResponse};
use crate::services::TokenService;
use axum::{Extension, Json};
use std::sync::Arc;

/// Handle token refresh.
///
/// The refresh token must decode, carry the refresh kind, and not be
/// revoked; it is not rotated.
#[utoipa::path(
    post,
    path = "/refresh",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "New access token issued", body = RefreshResponse),
        (status = 401, description = "Invalid or revoked refresh token"),
    ),
    tag = "auth"
)]
pub async fn refresh_handler(
    Extension(token_service): Extension<Arc<TokenService>>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, ApiAuthError> {
    let access_token = token_service.refresh(&request.refresh_token).await?;

    Ok(Json(RefreshResponse { access_token }))
}

#[cfg(test)]
mod tests {
    // Handler tests require integration test setup
}
