//! Request and response DTOs forming the public API contract.
//!
//! These types are the serde boundary of the backend: controllers deserialize
//! request bodies and query strings into them and serialize domain models back
//! out. Business logic lives on the server-side domain models, not here.

pub mod api;
pub mod attendance;
pub mod auth;
pub mod student;
pub mod teacher;
