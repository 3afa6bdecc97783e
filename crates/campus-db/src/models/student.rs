//! Student entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A student record.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier for the student.
    pub id: Uuid,

    /// Student's display name.
    pub name: String,

    /// Student number.
    pub sno: i64,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// Insert a new student.
    pub async fn create(pool: &sqlx::PgPool, name: &str, sno: i64) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r"
            INSERT INTO students (name, sno)
            VALUES ($1, $2)
            RETURNING *
            ",
        )
        .bind(name)
        .bind(sno)
        .fetch_one(pool)
        .await
    }

    /// Find a student by ID.
    pub async fn find_by_id(pool: &sqlx::PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all students.
    pub async fn list_all(pool: &sqlx::PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM students ORDER BY sno")
            .fetch_all(pool)
            .await
    }

    /// Delete a student. Returns false when no row matched.
    pub async fn delete(pool: &sqlx::PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
