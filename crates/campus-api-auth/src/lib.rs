//! Authentication API endpoints for campus.
//!
//! This crate provides the session lifecycle REST surface:
//! - Registration (POST /register)
//! - Login (POST /login)
//! - Token refresh (POST /refresh)
//! - Logout (POST /logout)
//! - Profile update (PUT /user/update)
//! - Login history (GET /user/history)
//!
//! # Example
//!
//! ```rust,ignore
//! use campus_api_auth::router::{auth_router, AuthState};
//!
//! let app = auth_router(state);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::{ApiAuthError, ErrorResponse};
pub use models::{
    HistoryQuery, LoginHistoryEntry, LoginRequest, LoginResponse, LogoutRequest, MessageResponse,
    RefreshRequest, RefreshResponse, RegisterRequest, UpdateUserRequest, UserInfo,
};
pub use router::{auth_router, AuthState};
pub use services::{
    validate_password, AuthService, EmailError, EmailPublisher, EmailSender, EmailWorker,
    LogEmailSender, MemoryRevocationStore, PgRevocationStore, RevocationStore, TokenConfig,
    TokenService, VerificationEmail,
};
