//! HTTP handlers for the roster endpoints.

pub mod groups;
pub mod students;

pub use groups::{
    add_students_handler, create_group_handler, delete_group_handler, get_group_handler,
    group_students_handler, list_groups_handler, remove_students_handler,
    transfer_student_handler,
};
pub use students::{
    create_student_handler, delete_student_handler, get_student_handler, list_students_handler,
};
