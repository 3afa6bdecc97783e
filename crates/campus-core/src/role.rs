//! User roles.
//!
//! The role set is closed: only `user` exists today. New accounts always
//! receive [`Role::User`]; unknown strings read back from storage fall back
//! to it rather than failing.

use serde::{Deserialize, Serialize};

/// Role assigned to a user account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Standard user account.
    #[default]
    User,
}

impl Role {
    /// Convert to database string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
        }
    }

    /// Parse from database string representation.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "user" => Self::User,
            _ => Self::User,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let role = Role::User;
        assert_eq!(Role::parse(role.as_str()), role);
    }

    #[test]
    fn unknown_string_defaults_to_user() {
        assert_eq!(Role::parse("superadmin"), Role::User);
    }

    #[test]
    fn serializes_as_snake_case_string() {
        let json = serde_json::to_string(&Role::User).unwrap();
        assert_eq!(json, "\"user\"");
    }

    #[test]
    fn default_is_user() {
        assert_eq!(Role::default(), Role::User);
    }
}
