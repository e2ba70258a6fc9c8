//! Request middleware utilities.

pub mod auth;
