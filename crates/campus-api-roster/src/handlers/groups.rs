//! Group CRUD and membership endpoint handlers.

use crate::error::ApiRosterError;
use crate::models::{
    AddStudentsRequest, CreateGroupRequest, GroupResponse, MessageResponse,
    RemoveStudentsRequest, StudentResponse, TransferStudentRequest,
};
use axum::extract::Path;
use axum::{Extension, Json};
use campus_db::{Group, StudentGroup};
use sqlx::PgPool;
use uuid::Uuid;

/// List all groups.
///
/// GET /groups
#[utoipa::path(
    get,
    path = "/groups",
    responses(
        (status = 200, description = "All groups", body = [GroupResponse]),
    ),
    tag = "roster"
)]
pub async fn list_groups_handler(
    Extension(pool): Extension<PgPool>,
) -> Result<Json<Vec<GroupResponse>>, ApiRosterError> {
    let groups = Group::list_all(&pool).await?;
    Ok(Json(groups.into_iter().map(Into::into).collect()))
}

/// Get a single group by ID.
///
/// GET /groups/:id
#[utoipa::path(
    get,
    path = "/groups/{id}",
    params(("id" = Uuid, Path, description = "Group ID")),
    responses(
        (status = 200, description = "The group", body = GroupResponse),
        (status = 404, description = "Group not found"),
    ),
    tag = "roster"
)]
pub async fn get_group_handler(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<GroupResponse>, ApiRosterError> {
    let group = Group::find_by_id(&pool, id)
        .await?
        .ok_or(ApiRosterError::GroupNotFound)?;

    Ok(Json(group.into()))
}

/// Create a new group.
///
/// POST /groups
#[utoipa::path(
    post,
    path = "/groups",
    request_body = CreateGroupRequest,
    responses(
        (status = 200, description = "Created group", body = GroupResponse),
    ),
    tag = "roster"
)]
pub async fn create_group_handler(
    Extension(pool): Extension<PgPool>,
    Json(request): Json<CreateGroupRequest>,
) -> Result<Json<GroupResponse>, ApiRosterError> {
    if request.name.trim().is_empty() {
        return Err(ApiRosterError::Validation("name is required".to_string()));
    }

    let group = Group::create(&pool, &request.name).await?;

    tracing::info!(group_id = %group.id, "Group created");

    Ok(Json(group.into()))
}

/// Delete a group.
///
/// DELETE /groups/:id
#[utoipa::path(
    delete,
    path = "/groups/{id}",
    params(("id" = Uuid, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 404, description = "Group not found"),
    ),
    tag = "roster"
)]
pub async fn delete_group_handler(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiRosterError> {
    let deleted = Group::delete(&pool, id).await?;
    if !deleted {
        return Err(ApiRosterError::GroupNotFound);
    }

    Ok(Json(MessageResponse::new("Group deleted successfully.")))
}

/// Ensure a group exists, returning 404 otherwise.
async fn require_group(pool: &PgPool, group_id: Uuid) -> Result<Group, ApiRosterError> {
    Group::find_by_id(pool, group_id)
        .await?
        .ok_or(ApiRosterError::GroupNotFound)
}

/// Add students to a group.
///
/// POST /groups/:group_id/students
#[utoipa::path(
    post,
    path = "/groups/{group_id}/students",
    params(("group_id" = Uuid, Path, description = "Group ID")),
    request_body = AddStudentsRequest,
    responses(
        (status = 200, description = "Students added", body = MessageResponse),
        (status = 404, description = "Group not found"),
    ),
    tag = "roster"
)]
pub async fn add_students_handler(
    Extension(pool): Extension<PgPool>,
    Path(group_id): Path<Uuid>,
    Json(request): Json<AddStudentsRequest>,
) -> Result<Json<MessageResponse>, ApiRosterError> {
    require_group(&pool, group_id).await?;

    StudentGroup::add_members(&pool, group_id, &request.student_ids).await?;

    Ok(Json(MessageResponse::new(
        "Students added to group successfully.",
    )))
}

/// Remove students from a group.
///
/// DELETE /groups/:group_id/students
#[utoipa::path(
    delete,
    path = "/groups/{group_id}/students",
    params(("group_id" = Uuid, Path, description = "Group ID")),
    request_body = RemoveStudentsRequest,
    responses(
        (status = 200, description = "Students removed", body = MessageResponse),
        (status = 404, description = "Group not found"),
    ),
    tag = "roster"
)]
pub async fn remove_students_handler(
    Extension(pool): Extension<PgPool>,
    Path(group_id): Path<Uuid>,
    Json(request): Json<RemoveStudentsRequest>,
) -> Result<Json<MessageResponse>, ApiRosterError> {
    require_group(&pool, group_id).await?;

    StudentGroup::remove_members(&pool, group_id, &request.student_ids).await?;

    Ok(Json(MessageResponse::new(
        "Students removed from group successfully.",
    )))
}

/// List the students in a group.
///
/// GET /groups/:group_id/students
#[utoipa::path(
    get,
    path = "/groups/{group_id}/students",
    params(("group_id" = Uuid, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Group members", body = [StudentResponse]),
        (status = 404, description = "Group not found"),
    ),
    tag = "roster"
)]
pub async fn group_students_handler(
    Extension(pool): Extension<PgPool>,
    Path(group_id): Path<Uuid>,
) -> Result<Json<Vec<StudentResponse>>, ApiRosterError> {
    require_group(&pool, group_id).await?;

    let members = StudentGroup::members_of(&pool, group_id).await?;

    Ok(Json(members.into_iter().map(Into::into).collect()))
}

/// Move a student from one group to another.
///
/// POST /groups/:from_id/transfer/:to_id
#[utoipa::path(
    post,
    path = "/groups/{from_id}/transfer/{to_id}",
    params(
        ("from_id" = Uuid, Path, description = "Source group ID"),
        ("to_id" = Uuid, Path, description = "Destination group ID"),
    ),
    request_body = TransferStudentRequest,
    responses(
        (status = 200, description = "Student transferred", body = MessageResponse),
        (status = 400, description = "Student not in the source group"),
        (status = 404, description = "One of the groups not found"),
    ),
    tag = "roster"
)]
pub async fn transfer_student_handler(
    Extension(pool): Extension<PgPool>,
    Path((from_id, to_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<TransferStudentRequest>,
) -> Result<Json<MessageResponse>, ApiRosterError> {
    require_group(&pool, from_id).await?;
    require_group(&pool, to_id).await?;

    if !StudentGroup::is_member(&pool, from_id, request.student_id).await? {
        return Err(ApiRosterError::NotAMember);
    }

    StudentGroup::transfer(&pool, from_id, to_id, request.student_id).await?;

    tracing::info!(
        student_id = %request.student_id,
        from_group = %from_id,
        to_group = %to_id,
        "Student transferred"
    );

    Ok(Json(MessageResponse::new("Student transferred successfully.")))
}

#[cfg(test)]
mod tests {
    // Handler tests require integration test setup
}
