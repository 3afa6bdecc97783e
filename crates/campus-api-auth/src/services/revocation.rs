//! Token revocation registry.
//!
//! A time-expiring set of revoked token strings. The store is an injected
//! capability so the process owner chooses the backing: a `moka` in-memory
//! cache for single-process deployments and tests, or Postgres for
//! durability. Entries lapse on their own after the given TTL; callers
//! never perform cleanup.

use async_trait::async_trait;
use campus_db::RevokedToken;
use moka::future::Cache;
use moka::Expiry;
use sqlx::PgPool;
use std::time::{Duration, Instant};

/// Maximum number of entries in the in-memory store.
const MAX_CACHE_ENTRIES: u64 = 100_000;

/// A time-expiring set of revoked tokens.
///
/// Revoking the same token twice is a no-op; the entry carries no state
/// beyond its presence, so concurrent revocations need no ordering.
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Record the token as invalid until `ttl` elapses.
    async fn revoke(&self, token: &str, ttl: Duration) -> Result<(), sqlx::Error>;

    /// Check whether the token is currently revoked.
    async fn is_revoked(&self, token: &str) -> Result<bool, sqlx::Error>;
}

/// Expiry policy that reads each entry's TTL from its value.
struct PerEntryTtl;

impl Expiry<String, Duration> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &Duration,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(*value)
    }
}

/// In-memory revocation store backed by a `moka` cache.
///
/// Entries are dropped automatically once their TTL lapses. Process-local:
/// restarts forget revocations, which natural token expiry bounds.
#[derive(Clone)]
pub struct MemoryRevocationStore {
    cache: Cache<String, Duration>,
}

impl MemoryRevocationStore {
    /// Create a new in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let cache = Cache::builder()
            .max_capacity(MAX_CACHE_ENTRIES)
            .expire_after(PerEntryTtl)
            .build();

        Self { cache }
    }
}

impl Default for MemoryRevocationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationStore for MemoryRevocationStore {
    async fn revoke(&self, token: &str, ttl: Duration) -> Result<(), sqlx::Error> {
        self.cache.insert(token.to_string(), ttl).await;
        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> Result<bool, sqlx::Error> {
        Ok(self.cache.get(token).await.is_some())
    }
}

/// Durable revocation store backed by the `revoked_tokens` table.
///
/// Lapsed rows stop counting as revoked immediately; a periodic cleanup
/// task owned by the process deletes them.
#[derive(Clone)]
pub struct PgRevocationStore {
    pool: PgPool,
}

impl PgRevocationStore {
    /// Create a new Postgres-backed store.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RevocationStore for PgRevocationStore {
    async fn revoke(&self, token: &str, ttl: Duration) -> Result<(), sqlx::Error> {
        let ttl =
            chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::days(3650));
        RevokedToken::insert(&self.pool, token, ttl).await
    }

    async fn is_revoked(&self, token: &str) -> Result<bool, sqlx::Error> {
        RevokedToken::is_revoked(&self.pool, token).await
    }
}
