//! Student CRUD endpoint handlers.

use crate::error::ApiRosterError;
use crate::models::{CreateStudentRequest, MessageResponse, StudentResponse};
use axum::extract::Path;
use axum::{Extension, Json};
use campus_db::Student;
use sqlx::PgPool;
use uuid::Uuid;

/// List all students.
///
/// GET /students
#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "All students", body = [StudentResponse]),
    ),
    tag = "roster"
)]
pub async fn list_students_handler(
    Extension(pool): Extension<PgPool>,
) -> Result<Json<Vec<StudentResponse>>, ApiRosterError> {
    let students = Student::list_all(&pool).await?;
    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// Get a single student by ID.
///
/// GET /students/:id
#[utoipa::path(
    get,
    path = "/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "The student", body = StudentResponse),
        (status = 404, description = "Student not found"),
    ),
    tag = "roster"
)]
pub async fn get_student_handler(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<StudentResponse>, ApiRosterError> {
    let student = Student::find_by_id(&pool, id)
        .await?
        .ok_or(ApiRosterError::StudentNotFound)?;

    Ok(Json(student.into()))
}

/// Create a new student.
///
/// POST /students
#[utoipa::path(
    post,
    path = "/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 200, description = "Created student", body = StudentResponse),
    ),
    tag = "roster"
)]
pub async fn create_student_handler(
    Extension(pool): Extension<PgPool>,
    Json(request): Json<CreateStudentRequest>,
) -> Result<Json<StudentResponse>, ApiRosterError> {
    if request.name.trim().is_empty() {
        return Err(ApiRosterError::Validation("name is required".to_string()));
    }

    let student = Student::create(&pool, &request.name, request.sno).await?;

    tracing::info!(student_id = %student.id, "Student created");

    Ok(Json(student.into()))
}

/// Delete a student.
///
/// DELETE /students/:id
#[utoipa::path(
    delete,
    path = "/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 404, description = "Student not found"),
    ),
    tag = "roster"
)]
pub async fn delete_student_handler(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiRosterError> {
    let deleted = Student::delete(&pool, id).await?;
    if !deleted {
        return Err(ApiRosterError::StudentNotFound);
    }

    Ok(Json(MessageResponse::new("success")))
}

#[cfg(test)]
mod tests {
    // Handler tests require integration test setup
}
