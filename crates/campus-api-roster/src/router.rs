//! Roster API router configuration.
//!
//! Routes:
//! - GET/POST /students, GET/DELETE /students/:id
//! - GET/POST /groups, GET/DELETE /groups/:id
//! - GET/POST/DELETE /groups/:group_id/students
//! - POST /groups/:from_id/transfer/:to_id

use crate::handlers::{
    add_students_handler, create_group_handler, create_student_handler, delete_group_handler,
    delete_student_handler, get_group_handler, get_student_handler, group_students_handler,
    list_groups_handler, list_students_handler, remove_students_handler,
    transfer_student_handler,
};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use sqlx::PgPool;

/// Build the roster router.
pub fn roster_router(pool: PgPool) -> Router {
    Router::new()
        .route(
            "/students",
            get(list_students_handler).post(create_student_handler),
        )
        .route(
            "/students/:id",
            get(get_student_handler).delete(delete_student_handler),
        )
        .route("/groups", get(list_groups_handler).post(create_group_handler))
        .route(
            "/groups/:id",
            get(get_group_handler).delete(delete_group_handler),
        )
        .route(
            "/groups/:group_id/students",
            get(group_students_handler)
                .post(add_students_handler)
                .delete(remove_students_handler),
        )
        .route(
            "/groups/:from_id/transfer/:to_id",
            post(transfer_student_handler),
        )
        .layer(Extension(pool))
}
