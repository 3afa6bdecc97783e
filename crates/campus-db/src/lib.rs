//! Database layer for campus.
//!
//! Model structs map directly onto tables via `sqlx::FromRow` and carry
//! their queries as associated async functions taking a `&PgPool`.
//! Migrations are embedded at compile time from `migrations/`.

pub mod error;
pub mod migrations;
pub mod models;

pub use error::{is_unique_violation, DbError};
pub use migrations::run_migrations;
pub use models::{Group, LoginHistory, RevokedToken, Student, StudentGroup, User};
