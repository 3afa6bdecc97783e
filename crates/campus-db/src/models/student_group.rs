//! Student/group membership model.
//!
//! Many-to-many relationship between students and groups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A membership linking a student to a group.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StudentGroup {
    /// The student ID.
    pub student_id: Uuid,

    /// The group ID.
    pub group_id: Uuid,

    /// When the membership was created.
    pub created_at: DateTime<Utc>,
}

/// Member row for group listings.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct GroupMemberInfo {
    pub id: Uuid,
    pub name: String,
    pub sno: i64,
}

impl StudentGroup {
    /// Add students to a group.
    ///
    /// Already-present members are skipped, so the operation is idempotent.
    pub async fn add_members(
        pool: &sqlx::PgPool,
        group_id: Uuid,
        student_ids: &[Uuid],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        for student_id in student_ids {
            sqlx::query(
                r"
                INSERT INTO student_groups (student_id, group_id)
                VALUES ($1, $2)
                ON CONFLICT (student_id, group_id) DO NOTHING
                ",
            )
            .bind(student_id)
            .bind(group_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Remove students from a group. Removing a non-member is a no-op.
    pub async fn remove_members(
        pool: &sqlx::PgPool,
        group_id: Uuid,
        student_ids: &[Uuid],
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r"
            DELETE FROM student_groups
            WHERE group_id = $1 AND student_id = ANY($2)
            ",
        )
        .bind(group_id)
        .bind(student_ids)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Check if a student is a member of a group.
    pub async fn is_member(
        pool: &sqlx::PgPool,
        group_id: Uuid,
        student_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result: Option<(i64,)> = sqlx::query_as(
            r"
            SELECT 1 FROM student_groups
            WHERE group_id = $1 AND student_id = $2
            ",
        )
        .bind(group_id)
        .bind(student_id)
        .fetch_optional(pool)
        .await?;

        Ok(result.is_some())
    }

    /// Get all students in a group, ordered by student number.
    pub async fn members_of(
        pool: &sqlx::PgPool,
        group_id: Uuid,
    ) -> Result<Vec<GroupMemberInfo>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT s.id, s.name, s.sno
            FROM student_groups sg
            JOIN students s ON sg.student_id = s.id
            WHERE sg.group_id = $1
            ORDER BY s.sno
            ",
        )
        .bind(group_id)
        .fetch_all(pool)
        .await
    }

    /// Move a student from one group to another in a single transaction.
    pub async fn transfer(
        pool: &sqlx::PgPool,
        from_group_id: Uuid,
        to_group_id: Uuid,
        student_id: Uuid,
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            r"
            DELETE FROM student_groups
            WHERE group_id = $1 AND student_id = $2
            ",
        )
        .bind(from_group_id)
        .bind(student_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
            INSERT INTO student_groups (student_id, group_id)
            VALUES ($1, $2)
            ON CONFLICT (student_id, group_id) DO NOTHING
            ",
        )
        .bind(student_id)
        .bind(to_group_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_member_info_fields() {
        let info = GroupMemberInfo {
            id: Uuid::new_v4(),
            name: "Ada Lovelace".to_string(),
            sno: 1815,
        };

        assert_eq!(info.sno, 1815);
    }
}
