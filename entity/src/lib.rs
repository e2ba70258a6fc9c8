pub mod prelude;

pub mod auth_token;
pub mod class_attendee;
pub mod class_session;
pub mod presence;
pub mod student;
pub mod teacher;
