//! Password strength policy.
//!
//! Checked at registration before any hashing or persistence work: a
//! password must be at least eight characters and contain at least one
//! digit and one uppercase letter.

/// Minimum password length requirement.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Result of password validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordValidationResult {
    /// Whether the password is acceptable.
    pub is_valid: bool,
    /// List of violated rules (empty if valid).
    pub violations: Vec<PasswordPolicyViolation>,
}

/// Specific password policy violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordPolicyViolation {
    /// Password is too short.
    TooShort { min: usize, actual: usize },
    /// Missing a digit.
    MissingDigit,
    /// Missing an uppercase letter.
    MissingUppercase,
}

impl std::fmt::Display for PasswordPolicyViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort { min, actual } => {
                write!(f, "Password too short: {actual} characters (minimum {min})")
            }
            Self::MissingDigit => write!(f, "Password must contain at least one digit"),
            Self::MissingUppercase => {
                write!(f, "Password must contain at least one uppercase letter")
            }
        }
    }
}

/// Validate a password against the strength policy.
#[must_use]
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut violations = Vec::new();
    let len = password.chars().count();

    if len < MIN_PASSWORD_LENGTH {
        violations.push(PasswordPolicyViolation::TooShort {
            min: MIN_PASSWORD_LENGTH,
            actual: len,
        });
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push(PasswordPolicyViolation::MissingDigit);
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push(PasswordPolicyViolation::MissingUppercase);
    }

    PasswordValidationResult {
        is_valid: violations.is_empty(),
        violations,
    }
}
