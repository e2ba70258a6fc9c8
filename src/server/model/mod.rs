//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer,
//! representing business entities and operation parameters. Domain models are
//! converted from entity models at the repository boundary and transformed to
//! DTOs at the controller boundary. The belt progression arithmetic lives on
//! the `Student` domain model.

pub mod auth;
pub mod class_session;
pub mod student;
pub mod teacher;
