//! Student group entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A student group.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier for the group.
    pub id: Uuid,

    /// Group display name.
    pub name: String,

    /// When the group was created.
    pub created_at: DateTime<Utc>,

    /// When the group was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Group {
    /// Insert a new group.
    pub async fn create(pool: &sqlx::PgPool, name: &str) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r"
            INSERT INTO groups (name)
            VALUES ($1)
            RETURNING *
            ",
        )
        .bind(name)
        .fetch_one(pool)
        .await
    }

    /// Find a group by ID.
    pub async fn find_by_id(pool: &sqlx::PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM groups WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all groups.
    pub async fn list_all(pool: &sqlx::PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM groups ORDER BY name")
            .fetch_all(pool)
            .await
    }

    /// Delete a group. Returns false when no row matched.
    pub async fn delete(pool: &sqlx::PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM groups WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
