//! Student factory for creating test student entities.
//!
//! Defaults produce a fresh white belt with no presences. The builder methods
//! cover the progression fields tests usually vary.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .uid("student-1")
///     .belt("roxa")
///     .degrees(3)
///     .total_presences(280)
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    uid: String,
    name: String,
    email: String,
    belt: String,
    age: i32,
    degrees: i32,
    extra_activities: i32,
    total_presences: i32,
    last_presence_date: Option<DateTime<Utc>>,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - uid: `"student_{id}"` where id is auto-incremented
    /// - name: `"Student {id}"`
    /// - email: `"student{id}@example.com"`
    /// - belt: `"branca"` with zero degrees, activities, and presences
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            uid: format!("student_{}", id),
            name: format!("Student {}", id),
            email: format!("student{}@example.com", id),
            belt: "branca".to_string(),
            age: 25,
            degrees: 0,
            extra_activities: 0,
            total_presences: 0,
            last_presence_date: None,
        }
    }

    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = uid.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn belt(mut self, belt: impl Into<String>) -> Self {
        self.belt = belt.into();
        self
    }

    pub fn degrees(mut self, degrees: i32) -> Self {
        self.degrees = degrees;
        self
    }

    pub fn extra_activities(mut self, extra_activities: i32) -> Self {
        self.extra_activities = extra_activities;
        self
    }

    pub fn total_presences(mut self, total_presences: i32) -> Self {
        self.total_presences = total_presences;
        self
    }

    pub fn last_presence_date(mut self, date: DateTime<Utc>) -> Self {
        self.last_presence_date = Some(date);
        self
    }

    /// Inserts the student into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            uid: ActiveValue::Set(self.uid),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            belt: ActiveValue::Set(self.belt),
            age: ActiveValue::Set(self.age),
            address: ActiveValue::Set(String::new()),
            education: ActiveValue::Set(String::new()),
            degrees: ActiveValue::Set(self.degrees),
            start_date: ActiveValue::Set(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
            photo_url: ActiveValue::Set(String::new()),
            extra_activities: ActiveValue::Set(self.extra_activities),
            total_presences: ActiveValue::Set(self.total_presences),
            last_presence_date: ActiveValue::Set(self.last_presence_date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
///
/// # Returns
/// - `Ok(Model)` - The created student entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}

/// Creates one presence row for a student.
///
/// # Arguments
/// - `db` - Database connection
/// - `student_uid` - Uid of the student the presence belongs to
/// - `date` - Presence timestamp
///
/// # Returns
/// - `Ok(Model)` - The created presence entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_presence(
    db: &DatabaseConnection,
    student_uid: &str,
    date: DateTime<Utc>,
) -> Result<entity::presence::Model, DbErr> {
    entity::presence::ActiveModel {
        student_uid: ActiveValue::Set(student_uid.to_string()),
        date: ActiveValue::Set(date),
        ..Default::default()
    }
    .insert(db)
    .await
}
