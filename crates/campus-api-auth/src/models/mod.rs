//! Request and response DTOs for the authentication endpoints.

pub mod requests;
pub mod responses;

pub use requests::{
    HistoryQuery, LoginRequest, LogoutRequest, RefreshRequest, RegisterRequest, UpdateUserRequest,
};
pub use responses::{
    LoginHistoryEntry, LoginResponse, MessageResponse, RefreshResponse, UserInfo,
};
