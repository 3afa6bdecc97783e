//! Login history endpoint handler.
//!
//! GET /user/history - List a user's logins.

use crate::error::ApiAuthError;
use crate::models::{HistoryQuery, LoginHistoryEntry};
use crate::services::AuthService;
use axum::extract::Query;
use axum::{Extension, Json};
use std::sync::Arc;

/// Return the full login history for a user, newest first.
///
/// An unknown user simply has no history.
#[utoipa::path(
    get,
    path = "/user/history",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Login history", body = [LoginHistoryEntry]),
    ),
    tag = "auth"
)]
pub async fn history_handler(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<LoginHistoryEntry>>, ApiAuthError> {
    let records = auth_service.login_history(query.user_id).await?;

    let entries = records.into_iter().map(Into::into).collect();

    Ok(Json(entries))
}

#[cfg(test)]
mod tests {
    // Handler tests require integration test setup
}
