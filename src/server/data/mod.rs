//! Data access layer for database operations.
//!
//! This module contains repositories handling all database access. Repositories
//! convert between entity models and domain models at the infrastructure
//! boundary, so the service layer never touches sea-orm types directly.

pub mod auth_token;
pub mod class_session;
pub mod student;
pub mod teacher;

#[cfg(test)]
mod test;
