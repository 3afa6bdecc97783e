//! Request and response DTOs for the roster endpoints.

use campus_db::models::student_group::GroupMemberInfo;
use campus_db::{Group, Student};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Generic acknowledgment response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create-student request payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    /// Student's display name.
    pub name: String,
    /// Student number.
    pub sno: i64,
}

/// Public view of a student.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    pub id: Uuid,
    pub name: String,
    pub sno: i64,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            sno: student.sno,
        }
    }
}

impl From<GroupMemberInfo> for StudentResponse {
    fn from(member: GroupMemberInfo) -> Self {
        Self {
            id: member.id,
            name: member.name,
            sno: member.sno,
        }
    }
}

/// Create-group request payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateGroupRequest {
    /// Group display name.
    pub name: String,
}

/// Public view of a group.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GroupResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self {
            id: group.id,
            name: group.name,
        }
    }
}

/// Payload for adding students to a group.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddStudentsRequest {
    pub student_ids: Vec<Uuid>,
}

/// Payload for removing students from a group.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RemoveStudentsRequest {
    pub student_ids: Vec<Uuid>,
}

/// Payload for transferring a student between groups.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransferStudentRequest {
    pub student_id: Uuid,
}
