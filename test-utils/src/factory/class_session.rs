//! Class session factory for creating test sessions with attendee rosters.

use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test class sessions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::class_session::ClassSessionFactory;
///
/// let session = ClassSessionFactory::new(&db, &teacher.uid)
///     .class_id("class_20260302_190000")
///     .attendee(&student.uid)
///     .attendee(&student.uid)
///     .build()
///     .await?;
/// ```
pub struct ClassSessionFactory<'a> {
    db: &'a DatabaseConnection,
    class_id: String,
    date: DateTime<Utc>,
    instructor_uid: String,
    attendee_uids: Vec<String>,
}

impl<'a> ClassSessionFactory<'a> {
    /// Creates a new ClassSessionFactory with default values.
    ///
    /// Defaults:
    /// - class_id: `"class_test_{id}"` where id is auto-incremented
    /// - date: a fixed timestamp in March 2026
    /// - no attendees
    pub fn new(db: &'a DatabaseConnection, instructor_uid: &str) -> Self {
        let id = next_id();
        Self {
            db,
            class_id: format!("class_test_{}", id),
            date: Utc.with_ymd_and_hms(2026, 3, 2, 19, 0, 0).unwrap(),
            instructor_uid: instructor_uid.to_string(),
            attendee_uids: Vec::new(),
        }
    }

    pub fn class_id(mut self, class_id: impl Into<String>) -> Self {
        self.class_id = class_id.into();
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Adds one attendee row. Call twice with the same uid to model a double
    /// marking.
    pub fn attendee(mut self, student_uid: &str) -> Self {
        self.attendee_uids.push(student_uid.to_string());
        self
    }

    /// Inserts the session and its attendee rows into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created class session entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::class_session::Model, DbErr> {
        let session = entity::class_session::ActiveModel {
            class_id: ActiveValue::Set(self.class_id),
            date: ActiveValue::Set(self.date),
            instructor_uid: ActiveValue::Set(self.instructor_uid),
        }
        .insert(self.db)
        .await?;

        for uid in self.attendee_uids {
            entity::class_attendee::ActiveModel {
                class_id: ActiveValue::Set(session.class_id.clone()),
                student_uid: ActiveValue::Set(uid),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(session)
    }
}

/// Creates a class session with default values and no attendees.
pub async fn create_class_session(
    db: &DatabaseConnection,
    instructor_uid: &str,
) -> Result<entity::class_session::Model, DbErr> {
    ClassSessionFactory::new(db, instructor_uid).build().await
}
