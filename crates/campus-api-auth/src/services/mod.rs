//! Business logic for the authentication endpoints.

pub mod auth_service;
pub mod email;
pub mod revocation;
pub mod token_service;
pub mod validation;

pub use auth_service::AuthService;
pub use email::{
    EmailError, EmailPublisher, EmailSender, EmailWorker, LogEmailSender, VerificationEmail,
};
pub use revocation::{MemoryRevocationStore, PgRevocationStore, RevocationStore};
pub use token_service::{TokenConfig, TokenService};
pub use validation::{validate_password, PasswordPolicyViolation, PasswordValidationResult};
