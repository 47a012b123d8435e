pub use super::attendance::Entity as Attendance;
pub use super::credentials::Entity as Credentials;
pub use super::group::Entity as Group;
pub use super::schedule::Entity as Schedule;
pub use super::session::Entity as Session;
pub use super::student::Entity as Student;
pub use super::subject::Entity as Subject;
pub use super::teacher::Entity as Teacher;
pub use super::teaching_assignment::Entity as TeachingAssignment;
pub use super::user::Entity as User;
pub use super::user_role::Entity as UserRole;
