//! HTTP handlers for the authentication endpoints.

pub mod history;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;
pub mod update_user;

pub use history::history_handler;
pub use login::login_handler;
pub use logout::logout_handler;
pub use refresh::refresh_handler;
pub use register::register_handler;
pub use update_user::update_user_handler;

use crate::error::ApiAuthError;

/// Collapse validator errors into a single validation error.
pub(crate) fn into_validation_error(e: validator::ValidationErrors) -> ApiAuthError {
    let errors: Vec<String> = e
        .field_errors()
        .values()
        .flat_map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.message.as_ref().map(std::string::ToString::to_string))
        })
        .collect();
    ApiAuthError::Validation(errors.join(", "))
}
