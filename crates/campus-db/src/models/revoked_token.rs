//! Revoked token model.
//!
//! Each row marks one token string as invalid until `expires_at`. Rows past
//! their expiry are swept by a periodic cleanup task; the token codec
//! rejects those tokens on its own by then.

use chrono::{DateTime, Duration, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A revoked token record.
#[derive(Debug, Clone, FromRow)]
pub struct RevokedToken {
    /// Unique record identifier.
    pub id: Uuid,

    /// The exact encoded token string that was revoked.
    pub token: String,

    /// When this revocation entry lapses.
    pub expires_at: DateTime<Utc>,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl RevokedToken {
    /// Insert a revocation entry lasting `ttl` from now.
    ///
    /// Uses ON CONFLICT DO NOTHING so revoking an already-revoked token is
    /// a no-op; concurrent revocations of the same token are idempotent.
    pub async fn insert<'e, E>(executor: E, token: &str, ttl: Duration) -> Result<(), sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = sqlx::Postgres>,
    {
        sqlx::query(
            r"
            INSERT INTO revoked_tokens (token, expires_at)
            VALUES ($1, $2)
            ON CONFLICT (token) DO NOTHING
            ",
        )
        .bind(token)
        .bind(Utc::now() + ttl)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Check if a token is currently revoked.
    ///
    /// Lapsed entries do not count as revoked.
    pub async fn is_revoked<'e, E>(executor: E, token: &str) -> Result<bool, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = sqlx::Postgres>,
    {
        let result: (bool,) = sqlx::query_as(
            r"
            SELECT EXISTS(
                SELECT 1 FROM revoked_tokens
                WHERE token = $1 AND expires_at > NOW()
            )
            ",
        )
        .bind(token)
        .fetch_one(executor)
        .await?;

        Ok(result.0)
    }

    /// Delete lapsed revocation entries.
    ///
    /// Returns the number of rows deleted.
    pub async fn delete_expired<'e, E>(executor: E) -> Result<u64, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = sqlx::Postgres>,
    {
        let result = sqlx::query(
            r"
            DELETE FROM revoked_tokens
            WHERE expires_at < NOW()
            ",
        )
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }
}
