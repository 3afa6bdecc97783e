//! OpenAPI document for the campus API.
//!
//! The generated document is served as JSON at /api-docs/openapi.json.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

/// The assembled API description.
#[derive(OpenApi)]
#[openapi(
    paths(
        campus_api_auth::handlers::register::register_handler,
        campus_api_auth::handlers::login::login_handler,
        campus_api_auth::handlers::refresh::refresh_handler,
        campus_api_auth::handlers::logout::logout_handler,
        campus_api_auth::handlers::update_user::update_user_handler,
        campus_api_auth::handlers::history::history_handler,
        campus_api_roster::handlers::students::list_students_handler,
        campus_api_roster::handlers::students::get_student_handler,
        campus_api_roster::handlers::students::create_student_handler,
        campus_api_roster::handlers::students::delete_student_handler,
        campus_api_roster::handlers::groups::list_groups_handler,
        campus_api_roster::handlers::groups::get_group_handler,
        campus_api_roster::handlers::groups::create_group_handler,
        campus_api_roster::handlers::groups::delete_group_handler,
        campus_api_roster::handlers::groups::add_students_handler,
        campus_api_roster::handlers::groups::remove_students_handler,
        campus_api_roster::handlers::groups::group_students_handler,
        campus_api_roster::handlers::groups::transfer_student_handler,
    ),
    components(schemas(
        campus_api_auth::models::requests::RegisterRequest,
        campus_api_auth::models::requests::LoginRequest,
        campus_api_auth::models::requests::RefreshRequest,
        campus_api_auth::models::requests::LogoutRequest,
        campus_api_auth::models::requests::UpdateUserRequest,
        campus_api_auth::models::responses::MessageResponse,
        campus_api_auth::models::responses::UserInfo,
        campus_api_auth::models::responses::LoginResponse,
        campus_api_auth::models::responses::RefreshResponse,
        campus_api_auth::models::responses::LoginHistoryEntry,
        campus_api_roster::models::CreateStudentRequest,
        campus_api_roster::models::StudentResponse,
        campus_api_roster::models::CreateGroupRequest,
        campus_api_roster::models::GroupResponse,
        campus_api_roster::models::AddStudentsRequest,
        campus_api_roster::models::RemoveStudentsRequest,
        campus_api_roster::models::TransferStudentRequest,
    )),
    tags(
        (name = "auth", description = "Authentication and session lifecycle"),
        (name = "roster", description = "Student and group management"),
    )
)]
pub struct ApiDoc;

/// Routes serving the OpenAPI document.
pub fn openapi_routes() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}

async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
