//! Database entity models.

pub mod group;
pub mod login_history;
pub mod revoked_token;
pub mod student;
pub mod student_group;
pub mod user;

pub use group::Group;
pub use login_history::LoginHistory;
pub use revoked_token::RevokedToken;
pub use student::Student;
pub use student_group::{GroupMemberInfo, StudentGroup};
pub use user::User;
