//! Login history model.
//!
//! One row per successful login; rows are never updated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A record of one successful login.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct LoginHistory {
    /// Unique identifier for this record.
    pub id: Uuid,

    /// The user who logged in.
    pub user_id: Uuid,

    /// Client User-Agent header, when one was sent.
    pub user_agent: Option<String>,

    /// When the login occurred.
    pub created_at: DateTime<Utc>,
}

impl LoginHistory {
    /// Append a login record.
    pub async fn create(
        pool: &sqlx::PgPool,
        user_id: Uuid,
        user_agent: Option<&str>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r"
            INSERT INTO login_history (user_id, user_agent)
            VALUES ($1, $2)
            RETURNING *
            ",
        )
        .bind(user_id)
        .bind(user_agent)
        .fetch_one(pool)
        .await
    }

    /// Get all login records for a user, newest first.
    pub async fn find_by_user(
        pool: &sqlx::PgPool,
        user_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM login_history
            WHERE user_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
