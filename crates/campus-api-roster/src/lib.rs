//! Student and group management endpoints for campus.
//!
//! Plain CRUD over students and groups plus many-to-many membership
//! operations (add, remove, list, transfer).

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;

pub use error::ApiRosterError;
pub use models::{
    AddStudentsRequest, CreateGroupRequest, CreateStudentRequest, GroupResponse, MessageResponse,
    RemoveStudentsRequest, StudentResponse, TransferStudentRequest,
};
pub use router::roster_router;
