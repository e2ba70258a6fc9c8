//! HTTP request handlers.
//!
//! Controllers authenticate the request through [`AuthGuard`], delegate to a
//! service, and shape the response. No business logic lives here.
//!
//! [`AuthGuard`]: crate::server::middleware::auth::AuthGuard

pub mod attendance;
pub mod auth;
pub mod student;
