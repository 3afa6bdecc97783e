//! Response DTOs for authentication endpoints.

use campus_core::Role;
use campus_db::{LoginHistory, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic acknowledgment response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Public view of a user account. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserInfo {
    /// User's email address.
    pub email: String,

    /// User's role.
    #[schema(value_type = String, example = "user")]
    pub role: Role,

    /// Number of successful logins.
    pub login_count: i64,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            role: user.role(),
            login_count: user.login_count,
        }
    }
}

/// Successful login response: one access token, one refresh token, and the
/// public view of the account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Short-lived bearer token.
    pub access_token: String,

    /// Longer-lived token used only to mint new access tokens.
    pub refresh_token: String,

    /// Public account info.
    pub user_info: UserInfo,
}

/// Successful refresh response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RefreshResponse {
    /// Newly minted access token.
    pub access_token: String,
}

/// One login history entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginHistoryEntry {
    /// Client User-Agent header recorded at login time.
    pub user_agent: Option<String>,

    /// When the login occurred.
    pub datetime: DateTime<Utc>,
}

impl From<LoginHistory> for LoginHistoryEntry {
    fn from(record: LoginHistory) -> Self {
        Self {
            user_agent: record.user_agent,
            datetime: record.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn user_info_excludes_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            role: "user".to_string(),
            login_count: 3,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let info = UserInfo::from(&user);
        let json = serde_json::to_string(&info).unwrap();

        assert!(json.contains("a@x.com"));
        assert!(json.contains("\"login_count\":3"));
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn history_entry_from_record() {
        let record = LoginHistory {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            user_agent: Some("Mozilla/5.0".to_string()),
            created_at: Utc::now(),
        };

        let entry = LoginHistoryEntry::from(record);
        assert_eq!(entry.user_agent.as_deref(), Some("Mozilla/5.0"));
    }
}
