mod auth_token;
mod class_session;
mod student;
mod teacher;
