//! Authentication primitives for campus.
//!
//! - [`password`] - Argon2id password hashing and verification
//! - [`claims`] - Token claims and the access/refresh kind marker
//! - [`jwt`] - Signed token encoding and decoding
//! - [`error`] - Authentication error types

pub mod claims;
pub mod error;
pub mod jwt;
pub mod password;

pub use claims::{Claims, TokenKind};
pub use error::AuthError;
pub use jwt::{decode_token, encode_token};
pub use password::PasswordHasher;
