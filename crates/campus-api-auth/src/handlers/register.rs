//! Registration endpoint handler.
//!
//! POST /register - Create a user account.

use crate::error::ApiAuthError;
use crate::handlers::into_validation_error;
use crate::models::{MessageResponse, RegisterRequest};
use crate::services::{AuthService, EmailPublisher, VerificationEmail};
use axum::{Extension, Json};
use std::sync::Arc;
use validator::Validate;

/// Handle user registration.
///
/// Validates the payload, enforces the password strength policy, creates
/// the account, and queues a verification email. The email is best-effort:
/// registration succeeds whether or not it is ever delivered.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User created", body = MessageResponse),
        (status = 400, description = "Weak password or duplicate email"),
    ),
    tag = "auth"
)]
pub async fn register_handler(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Extension(email_publisher): Extension<EmailPublisher>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiAuthError> {
    request.validate().map_err(into_validation_error)?;

    let user = auth_service
        .register(&request.email, &request.password)
        .await?;

    email_publisher.publish(VerificationEmail {
        email: user.email.clone(),
        user_id: user.user_id(),
    });

    Ok(Json(MessageResponse::new(
        "User created successfully. Please verify your email.",
    )))
}
