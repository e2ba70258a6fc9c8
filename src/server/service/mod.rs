//! Business logic layer.
//!
//! Services coordinate repositories and domain models to implement the
//! application's operations. Controllers hand validated-enough input to a
//! service and translate its result into an HTTP response.

pub mod attendance;
pub mod auth;
pub mod student;
