pub use super::auth_token::Entity as AuthToken;
pub use super::class_attendee::Entity as ClassAttendee;
pub use super::class_session::Entity as ClassSession;
pub use super::presence::Entity as Presence;
pub use super::student::Entity as Student;
pub use super::teacher::Entity as Teacher;
