//! User account model.

use campus_core::{Role, UserId};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A user account.
///
/// Emails are stored exactly as supplied (case-sensitive) and are unique
/// across all accounts. The password hash is an opaque PHC string; it never
/// leaves this layer except for verification.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Unique identifier for the user.
    pub id: Uuid,

    /// User's email address (unique, case-sensitive as stored).
    pub email: String,

    /// Argon2id password hash.
    pub password_hash: String,

    /// Role string, see [`Role`].
    pub role: String,

    /// Number of successful logins.
    pub login_count: i64,

    /// When the user was created.
    pub created_at: DateTime<Utc>,

    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Get the user ID as a typed `UserId`.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        UserId::from_uuid(self.id)
    }

    /// Get the role as an enum.
    #[must_use]
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }

    /// Insert a new user.
    ///
    /// Relies on the `users.email` unique constraint: a concurrent insert
    /// of the same email surfaces as a 23505 database error, which callers
    /// translate into a duplicate-email domain error.
    pub async fn create(
        pool: &sqlx::PgPool,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r"
            INSERT INTO users (email, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING *
            ",
        )
        .bind(email)
        .bind(password_hash)
        .bind(role.as_str())
        .fetch_one(pool)
        .await
    }

    /// Find a user by ID.
    pub async fn find_by_id(pool: &sqlx::PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by exact email.
    pub async fn find_by_email(
        pool: &sqlx::PgPool,
        email: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Check if an email is already registered.
    pub async fn email_exists(pool: &sqlx::PgPool, email: &str) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(pool)
            .await?;

        Ok(count > 0)
    }

    /// Increment the login counter, returning the updated row.
    ///
    /// The increment happens in SQL so concurrent logins for the same user
    /// cannot lose updates, though it is not transactional with the
    /// matching history append.
    pub async fn increment_login_count(
        pool: &sqlx::PgPool,
        id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            UPDATE users
            SET login_count = login_count + 1, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            ",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Replace a user's email and password hash.
    pub async fn update_credentials(
        pool: &sqlx::PgPool,
        id: Uuid,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            UPDATE users
            SET email = $2, password_hash = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            ",
        )
        .bind(id)
        .bind(email)
        .bind(password_hash)
        .fetch_optional(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "Test@Example.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            role: "user".to_string(),
            login_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn user_id_conversion() {
        let user = sample_user();
        assert_eq!(*user.user_id().as_uuid(), user.id);
    }

    #[test]
    fn role_accessor_parses_stored_string() {
        let user = sample_user();
        assert_eq!(user.role(), Role::User);

        let mut user = sample_user();
        user.role = "something-else".to_string();
        assert_eq!(user.role(), Role::User);
    }
}
