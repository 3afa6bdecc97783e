//! Authentication API router configuration.
//!
//! Routes:
//! - POST /register
//! - POST /login
//! - POST /refresh
//! - POST /logout
//! - PUT /user/update
//! - GET /user/history

use crate::handlers::{
    history_handler, login_handler, logout_handler, refresh_handler, register_handler,
    update_user_handler,
};
use crate::services::{AuthService, EmailPublisher, TokenService};
use axum::{
    routing::{get, post, put},
    Extension, Router,
};
use sqlx::PgPool;
use std::sync::Arc;

/// Application state for authentication routes.
#[derive(Clone)]
pub struct AuthState {
    /// Database connection pool.
    pub pool: PgPool,
    /// User operations service.
    pub auth_service: Arc<AuthService>,
    /// Token issuance and revocation service.
    pub token_service: Arc<TokenService>,
    /// Fire-and-forget verification email queue.
    pub email_publisher: EmailPublisher,
}

impl AuthState {
    /// Create a new auth state.
    #[must_use]
    pub fn new(
        pool: PgPool,
        auth_service: AuthService,
        token_service: TokenService,
        email_publisher: EmailPublisher,
    ) -> Self {
        Self {
            pool,
            auth_service: Arc::new(auth_service),
            token_service: Arc::new(token_service),
            email_publisher,
        }
    }
}

/// Build the authentication router.
///
/// Services are injected via `Extension` so the router composes with
/// others without a shared state type.
pub fn auth_router(state: AuthState) -> Router {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/refresh", post(refresh_handler))
        .route("/logout", post(logout_handler))
        .route("/user/update", put(update_user_handler))
        .route("/user/history", get(history_handler))
        .layer(Extension(state.pool))
        .layer(Extension(state.auth_service))
        .layer(Extension(state.token_service))
        .layer(Extension(state.email_publisher))
}
