//! Login endpoint handler.
//!
//! POST /login - Authenticate a user and issue tokens.

use crate::error::ApiAuthError;
use crate::handlers::into_validation_error;
use crate::models::{LoginRequest, LoginResponse, UserInfo};
use crate::services::{AuthService, TokenService};
use axum::http::HeaderMap;
use axum::{Extension, Json};
use std::sync::Arc;
use validator::Validate;

/// Handle user login.
///
/// Verifies the credentials, then issues one access and one refresh token,
/// appends a login history row carrying the client's User-Agent, and bumps
/// the login counter.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials"),
    ),
    tag = "auth"
)]
pub async fn login_handler(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Extension(token_service): Extension<Arc<TokenService>>,
    headers: HeaderMap,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiAuthError> {
    request.validate().map_err(into_validation_error)?;

    let user_agent = headers
        .get(axum::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok());

    let user = auth_service
        .login(&request.email, &request.password)
        .await?;

    let user = auth_service.record_login(user.id, user_agent).await?;

    let (access_token, refresh_token) = token_service.issue_pair(&user.id.to_string())?;

    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
        user_info: UserInfo::from(&user),
    }))
}

#[cfg(test)]
mod tests {
    // Handler tests require integration test setup
}
