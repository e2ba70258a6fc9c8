//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with
//! sensible defaults, reducing boilerplate in tests. Factories handle foreign
//! key relationships so tests stay concise.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let student = factory::student::create_student(&db).await?;
//!     let teacher = factory::teacher::create_teacher(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let student = factory::student::StudentFactory::new(&db)
//!     .belt("azul")
//!     .degrees(2)
//!     .total_presences(180)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `student` - Create student entities and presence rows
//! - `teacher` - Create teacher entities
//! - `class_session` - Create class sessions with attendee rosters
//! - `auth_token` - Create issued bearer tokens
//! - `helpers` - Unique id generation shared by the factories

pub mod auth_token;
pub mod class_session;
pub mod helpers;
pub mod student;
pub mod teacher;

// Re-export commonly used factory functions for concise usage
pub use auth_token::create_auth_token;
pub use class_session::create_class_session;
pub use student::{create_presence, create_student};
pub use teacher::create_teacher;
