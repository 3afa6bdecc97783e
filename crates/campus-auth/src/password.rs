//! Password hashing with Argon2id.
//!
//! Hashing is deliberately slow and salted; verification treats a malformed
//! stored hash as a non-match rather than an error.

use crate::error::AuthError;
use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

/// Password hasher configuration.
///
/// Defaults to OWASP-recommended Argon2id parameters:
/// memory 19456 KiB, 2 iterations, parallelism 1.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    /// Create a new password hasher with the default parameters.
    #[must_use]
    pub fn new() -> Self {
        // m=19456 (19 MiB), t=2, p=1. These are hardcoded constants that are
        // always valid; failure would indicate a bug in the argon2 crate.
        let params = Params::new(19456, 2, 1, None)
            .expect("default Argon2 parameters are valid constants");

        Self { params }
    }

    /// Create a password hasher with custom parameters.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` if the parameters are invalid.
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, AuthError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AuthError::HashingFailed(format!("Invalid parameters: {e}")))?;

        Ok(Self { params })
    }

    /// Hash a password, producing a PHC-formatted string with a fresh salt.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` if hashing fails.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashingFailed(format!("Hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verify a password against a stored PHC-formatted hash.
    ///
    /// Returns `false` for a wrong password and for a malformed stored
    /// hash; this function never fails.
    #[must_use]
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            tracing::debug!("Stored password hash is not valid PHC format");
            return false;
        };

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Small parameters keep the test suite fast; production uses the
    // defaults in `PasswordHasher::new`.
    fn test_hasher() -> PasswordHasher {
        PasswordHasher::with_params(4096, 1, 1).unwrap()
    }

    #[test]
    fn hash_is_phc_argon2id() {
        let hash = test_hasher().hash("test-password").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn verify_correct_password() {
        let hasher = test_hasher();
        let hash = hasher.hash("correct-password").unwrap();
        assert!(hasher.verify("correct-password", &hash));
    }

    #[test]
    fn verify_incorrect_password() {
        let hasher = test_hasher();
        let hash = hasher.hash("correct-password").unwrap();
        assert!(!hasher.verify("wrong-password", &hash));
    }

    #[test]
    fn verify_malformed_hash_is_false_not_error() {
        let hasher = test_hasher();
        assert!(!hasher.verify("password", "not-a-valid-hash"));
        assert!(!hasher.verify("password", ""));
    }

    #[test]
    fn same_password_different_salts() {
        let hasher = test_hasher();
        let hash1 = hasher.hash("same-password").unwrap();
        let hash2 = hasher.hash("same-password").unwrap();

        assert_ne!(hash1, hash2);
        assert!(hasher.verify("same-password", &hash1));
        assert!(hasher.verify("same-password", &hash2));
    }

    #[test]
    fn unicode_password() {
        let hasher = test_hasher();
        let password = "пароль日本語🔐";
        let hash = hasher.hash(password).unwrap();

        assert!(hasher.verify(password, &hash));
        assert!(!hasher.verify("wrong", &hash));
    }

    #[test]
    fn invalid_custom_params_rejected() {
        assert!(PasswordHasher::with_params(0, 0, 0).is_err());
    }
}
