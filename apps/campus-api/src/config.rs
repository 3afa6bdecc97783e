//! Application configuration loaded from environment variables.
//!
//! Fail-fast: required variables must be present and valid or the
//! application exits with a clear error message before serving traffic.

use std::env;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {var}")]
    Missing { var: String },

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind.
    pub host: String,

    /// Port to bind.
    pub port: u16,

    /// Postgres connection string.
    pub database_url: String,

    /// Process-wide token signing secret.
    pub jwt_secret: String,

    /// Log filter directive (e.g. "info,campus=debug").
    pub rust_log: String,

    /// Access token validity in minutes.
    pub access_token_minutes: i64,

    /// Refresh token validity in days.
    pub refresh_token_days: i64,

    /// Floor for revocation entry lifetime in seconds.
    pub revocation_ttl_secs: u64,

    /// Allowed CORS origins; `*` means any.
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a required variable is absent or a value
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = required("DATABASE_URL")?;

        let jwt_secret = required("JWT_SECRET")?;
        if jwt_secret.len() < 16 {
            return Err(ConfigError::InvalidValue {
                var: "JWT_SECRET".to_string(),
                message: "Must be at least 16 bytes".to_string(),
            });
        }

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parsed("PORT", 8080)?,
            database_url,
            jwt_secret,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            access_token_minutes: parsed("ACCESS_TOKEN_MINUTES", 15)?,
            refresh_token_days: parsed("REFRESH_TOKEN_DAYS", 7)?,
            revocation_ttl_secs: parsed("REVOCATION_TTL_SECS", 3600)?,
            cors_origins: parse_list(
                &env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()),
            ),
        })
    }

    /// The address to bind, as `host:port`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConfigError::Missing {
            var: var.to_string(),
        })
}

fn parsed<T: std::str::FromStr>(var: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(value) => value.parse().map_err(|e| ConfigError::InvalidValue {
            var: var.to_string(),
            message: format!("{e}"),
        }),
        Err(_) => Ok(default),
    }
}

/// Split a comma-separated list, dropping empty entries.
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_splits_and_trims() {
        let list = parse_list("http://a.example, http://b.example ,");
        assert_eq!(list, vec!["http://a.example", "http://b.example"]);
    }

    #[test]
    fn parse_list_wildcard() {
        assert_eq!(parse_list("*"), vec!["*"]);
    }

    #[test]
    fn parse_list_empty_is_empty() {
        assert!(parse_list("").is_empty());
    }
}
