//! Token claims.
//!
//! Every issued token carries the standard registered claims plus a `kind`
//! marker distinguishing access tokens from refresh tokens. Access and
//! refresh tokens share the same codec and claims shape and differ only in
//! `kind` and lifetime; consumers must reject a token of the wrong kind.

use campus_core::UserId;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The purpose a token was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Short-lived bearer credential authorizing requests.
    Access,
    /// Longer-lived credential used only to mint new access tokens.
    Refresh,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Access => write!(f, "access"),
            Self::Refresh => write!(f, "refresh"),
        }
    }
}

/// Claims embedded in a signed token.
///
/// # Example
///
/// ```
/// use campus_auth::{Claims, TokenKind};
///
/// let claims = Claims::builder()
///     .subject("user-123")
///     .kind(TokenKind::Access)
///     .expires_in_secs(900)
///     .build();
///
/// assert_eq!(claims.sub, "user-123");
/// assert!(!claims.is_expired());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject - the user ID the token was issued for.
    pub sub: String,

    /// Expiration time as Unix timestamp.
    pub exp: i64,

    /// Issued at as Unix timestamp.
    pub iat: i64,

    /// Unique identifier for this token.
    pub jti: String,

    /// Whether this is an access or a refresh token.
    pub kind: TokenKind,
}

impl Claims {
    /// Create a new builder for constructing claims.
    #[must_use]
    pub fn builder() -> ClaimsBuilder {
        ClaimsBuilder::default()
    }

    /// Check if the token is expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Seconds until expiry; zero when already expired.
    #[must_use]
    pub fn remaining_secs(&self) -> i64 {
        (self.exp - Utc::now().timestamp()).max(0)
    }

    /// Parse the subject as a typed `UserId`, if it is one.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.sub.parse().ok()
    }
}

/// Builder for constructing claims.
#[derive(Debug, Default)]
pub struct ClaimsBuilder {
    sub: Option<String>,
    exp: Option<i64>,
    iat: Option<i64>,
    jti: Option<String>,
    kind: Option<TokenKind>,
}

impl ClaimsBuilder {
    /// Set the subject (user ID).
    #[must_use]
    pub fn subject(mut self, sub: impl Into<String>) -> Self {
        self.sub = Some(sub.into());
        self
    }

    /// Set the token kind.
    #[must_use]
    pub fn kind(mut self, kind: TokenKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set expiration time as Unix timestamp.
    #[must_use]
    pub fn expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set expiration time as seconds from now.
    #[must_use]
    pub fn expires_in_secs(mut self, secs: i64) -> Self {
        self.exp = Some(Utc::now().timestamp() + secs);
        self
    }

    /// Set expiration time using a Duration.
    #[must_use]
    pub fn expires_in(mut self, duration: Duration) -> Self {
        self.exp = Some((Utc::now() + duration).timestamp());
        self
    }

    /// Set the issued-at time.
    #[must_use]
    pub fn issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Build the claims.
    ///
    /// # Defaults
    ///
    /// - `sub`: empty string if not set
    /// - `exp`: 15 minutes from now if not set
    /// - `iat`: current time if not set
    /// - `jti`: new UUID v4
    /// - `kind`: `Access`
    #[must_use]
    pub fn build(self) -> Claims {
        let now = Utc::now().timestamp();

        Claims {
            sub: self.sub.unwrap_or_default(),
            exp: self.exp.unwrap_or(now + 900),
            iat: self.iat.unwrap_or(now),
            jti: self.jti.unwrap_or_else(|| Uuid::new_v4().to_string()),
            kind: self.kind.unwrap_or(TokenKind::Access),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let claims = Claims::builder()
            .subject("user-123")
            .kind(TokenKind::Refresh)
            .build();

        assert_eq!(claims.sub, "user-123");
        assert_eq!(claims.kind, TokenKind::Refresh);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn kind_defaults_to_access() {
        let claims = Claims::builder().subject("user-123").build();
        assert_eq!(claims.kind, TokenKind::Access);
    }

    #[test]
    fn expiration() {
        let claims = Claims::builder()
            .subject("user-123")
            .expires_in_secs(3600)
            .build();
        assert!(!claims.is_expired());
        assert!(claims.remaining_secs() > 3500);

        let claims = Claims::builder()
            .subject("user-123")
            .expiration(Utc::now().timestamp() - 3600)
            .build();
        assert!(claims.is_expired());
        assert_eq!(claims.remaining_secs(), 0);
    }

    #[test]
    fn user_id_parses_uuid_subject() {
        let id = UserId::new();
        let claims = Claims::builder().subject(id.to_string()).build();
        assert_eq!(claims.user_id(), Some(id));

        let claims = Claims::builder().subject("not-a-uuid").build();
        assert_eq!(claims.user_id(), None);
    }

    #[test]
    fn kind_serializes_lowercase() {
        let claims = Claims::builder().kind(TokenKind::Refresh).build();
        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains("\"kind\":\"refresh\""));
    }

    #[test]
    fn serde_roundtrip() {
        let claims = Claims::builder()
            .subject("user-456")
            .kind(TokenKind::Access)
            .expires_in_secs(900)
            .build();

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(claims, deserialized);
    }

    #[test]
    fn distinct_tokens_get_distinct_jti() {
        let a = Claims::builder().subject("u").build();
        let b = Claims::builder().subject("u").build();
        assert_ne!(a.jti, b.jti);
    }
}
