//! Authentication service for user operations.
//!
//! Handles registration, credential verification, login bookkeeping, and
//! profile updates. Token issuance lives in [`super::TokenService`].

use crate::error::ApiAuthError;
use crate::services::validation::validate_password;
use campus_auth::PasswordHasher;
use campus_core::Role;
use campus_db::{is_unique_violation, LoginHistory, User};
use sqlx::PgPool;
use uuid::Uuid;

/// Service for user authentication operations.
#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
    password_hasher: PasswordHasher,
}

impl AuthService {
    /// Create a new authentication service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            password_hasher: PasswordHasher::default(),
        }
    }

    /// Create a service with a custom hasher (faster parameters in tests).
    #[must_use]
    pub fn with_hasher(pool: PgPool, password_hasher: PasswordHasher) -> Self {
        Self {
            pool,
            password_hasher,
        }
    }

    /// Register a new user.
    ///
    /// The strength policy runs before any hashing or store write. Email
    /// uniqueness is ultimately decided by the store: a concurrent
    /// registration losing the unique-constraint race gets
    /// `DuplicateEmail`, same as the pre-check path.
    ///
    /// # Errors
    ///
    /// - `ApiAuthError::WeakPassword` if the password fails the policy
    /// - `ApiAuthError::DuplicateEmail` if the email is already registered
    pub async fn register(&self, email: &str, password: &str) -> Result<User, ApiAuthError> {
        let policy = validate_password(password);
        if !policy.is_valid {
            let violations = policy.violations.iter().map(ToString::to_string).collect();
            return Err(ApiAuthError::WeakPassword(violations));
        }

        if User::email_exists(&self.pool, email).await? {
            return Err(ApiAuthError::DuplicateEmail);
        }

        let password_hash = self
            .password_hasher
            .hash(password)
            .map_err(|e| ApiAuthError::Internal(format!("Password hashing failed: {e}")))?;

        let user = User::create(&self.pool, email, &password_hash, Role::User)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ApiAuthError::DuplicateEmail
                } else {
                    ApiAuthError::Database(e)
                }
            })?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    /// Authenticate a user with email and password.
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller to prevent email enumeration.
    ///
    /// # Errors
    ///
    /// Returns `ApiAuthError::InvalidCredentials` for either failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiAuthError> {
        let user = User::find_by_email(&self.pool, email).await?;

        let user = user.ok_or_else(|| {
            tracing::debug!("Login attempt for non-existent user");
            ApiAuthError::InvalidCredentials
        })?;

        if !self.password_hasher.verify(password, &user.password_hash) {
            tracing::debug!(user_id = %user.id, "Invalid password attempt");
            return Err(ApiAuthError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Record a successful login: append a history row and bump the
    /// counter. Returns the user with the updated count.
    ///
    /// The two writes are independent operations; the counter increment is
    /// last-write-wins across concurrent logins for the same account.
    pub async fn record_login(
        &self,
        user_id: Uuid,
        user_agent: Option<&str>,
    ) -> Result<User, ApiAuthError> {
        LoginHistory::create(&self.pool, user_id, user_agent).await?;

        let user = User::increment_login_count(&self.pool, user_id)
            .await?
            .ok_or(ApiAuthError::UserNotFound)?;

        tracing::info!(user_id = %user.id, login_count = user.login_count, "User logged in");

        Ok(user)
    }

    /// Replace a user's email and password.
    ///
    /// # Errors
    ///
    /// Returns `ApiAuthError::UserNotFound` if no such user exists.
    pub async fn update_user(
        &self,
        user_id: Uuid,
        email: &str,
        password: &str,
    ) -> Result<User, ApiAuthError> {
        let password_hash = self
            .password_hasher
            .hash(password)
            .map_err(|e| ApiAuthError::Internal(format!("Password hashing failed: {e}")))?;

        let user = User::update_credentials(&self.pool, user_id, email, &password_hash)
            .await?
            .ok_or(ApiAuthError::UserNotFound)?;

        tracing::info!(user_id = %user.id, "User credentials updated");

        Ok(user)
    }

    /// All login history for a user, newest first.
    pub async fn login_history(&self, user_id: Uuid) -> Result<Vec<LoginHistory>, ApiAuthError> {
        Ok(LoginHistory::find_by_user(&self.pool, user_id).await?)
    }
}
