//! Student data repository for database operations.
//!
//! Handles student creation, profile updates, presence recording, and queries
//! with conversion between entity models and domain models at the
//! infrastructure boundary. Presence history always loads oldest-first so the
//! progression arithmetic and the API see a consistent ordering.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::student::{CreateStudentParam, Student, UpdateStudentParam},
};

/// Checks a client-supplied count against the i32 column range. Values past
/// `i32::MAX` would wrap negative and poison the stored row.
fn column_value(field: &'static str, value: u32) -> Result<i32, AppError> {
    i32::try_from(value)
        .map_err(|_| AppError::BadRequest(format!("Field '{field}' is out of range")))
}

/// Repository providing database operations for student management.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new StudentRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a student, or replaces the profile if the uid already exists.
    ///
    /// Progression counters are taken from the parameter as-is; registration
    /// passes zeroes, while imports of existing students may carry history.
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student with an empty presence history
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: CreateStudentParam) -> Result<Student, AppError> {
        let entity = entity::prelude::Student::insert(entity::student::ActiveModel {
            uid: ActiveValue::Set(param.uid),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            belt: ActiveValue::Set(param.belt.as_str().to_string()),
            age: ActiveValue::Set(column_value("age", param.age)?),
            address: ActiveValue::Set(param.address),
            education: ActiveValue::Set(param.education),
            degrees: ActiveValue::Set(column_value("degrees", param.degrees)?),
            start_date: ActiveValue::Set(param.start_date),
            photo_url: ActiveValue::Set(param.photo_url),
            extra_activities: ActiveValue::Set(column_value(
                "extra_activities",
                param.extra_activities,
            )?),
            total_presences: ActiveValue::Set(0),
            last_presence_date: ActiveValue::Set(None),
        })
        .on_conflict(
            OnConflict::column(entity::student::Column::Uid)
                .update_columns([
                    entity::student::Column::Name,
                    entity::student::Column::Email,
                    entity::student::Column::Belt,
                    entity::student::Column::Age,
                    entity::student::Column::Address,
                    entity::student::Column::Education,
                    entity::student::Column::Degrees,
                    entity::student::Column::StartDate,
                    entity::student::Column::PhotoUrl,
                    entity::student::Column::ExtraActivities,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Student::from_entity(entity, Vec::new())?)
    }

    /// Finds a student by uid, loading their full presence history.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found with history ordered oldest-first
    /// - `Ok(None)` - No student with that uid
    /// - `Err(AppError)` - Database error or corrupt stored state
    pub async fn find_by_uid(&self, uid: &str) -> Result<Option<Student>, AppError> {
        let Some(entity) = entity::prelude::Student::find_by_id(uid).one(self.db).await? else {
            return Ok(None);
        };

        let history = entity
            .find_related(entity::prelude::Presence)
            .order_by_asc(entity::presence::Column::Date)
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| p.date)
            .collect();

        Ok(Some(Student::from_entity(entity, history)?))
    }

    /// Gets all students ordered alphabetically by name, each with their full
    /// presence history.
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - All students (empty if none registered)
    /// - `Err(AppError)` - Database error or corrupt stored state
    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        let rows = entity::prelude::Student::find()
            .find_with_related(entity::prelude::Presence)
            .order_by_asc(entity::student::Column::Name)
            .order_by_asc(entity::presence::Column::Date)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(student, presences)| {
                let history = presences.into_iter().map(|p| p.date).collect();
                Ok(Student::from_entity(student, history)?)
            })
            .collect()
    }

    /// Applies a partial update to a student's profile.
    ///
    /// Only fields present in the parameter are written; everything else keeps
    /// its stored value.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The updated student with history
    /// - `Ok(None)` - No student with that uid
    /// - `Err(AppError)` - Database error during update
    pub async fn update(
        &self,
        uid: &str,
        param: UpdateStudentParam,
    ) -> Result<Option<Student>, AppError> {
        let Some(existing) = entity::prelude::Student::find_by_id(uid).one(self.db).await? else {
            return Ok(None);
        };

        let mut model = entity::student::ActiveModel::from(existing);
        if let Some(name) = param.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(email) = param.email {
            model.email = ActiveValue::Set(email);
        }
        if let Some(belt) = param.belt {
            model.belt = ActiveValue::Set(belt.as_str().to_string());
        }
        if let Some(age) = param.age {
            model.age = ActiveValue::Set(column_value("age", age)?);
        }
        if let Some(address) = param.address {
            model.address = ActiveValue::Set(address);
        }
        if let Some(education) = param.education {
            model.education = ActiveValue::Set(education);
        }
        if let Some(degrees) = param.degrees {
            model.degrees = ActiveValue::Set(column_value("degrees", degrees)?);
        }
        if let Some(start_date) = param.start_date {
            model.start_date = ActiveValue::Set(start_date);
        }
        if let Some(photo_url) = param.photo_url {
            model.photo_url = ActiveValue::Set(photo_url);
        }
        if let Some(extra_activities) = param.extra_activities {
            model.extra_activities =
                ActiveValue::Set(column_value("extra_activities", extra_activities)?);
        }

        entity::prelude::Student::update(model).exec(self.db).await?;

        self.find_by_uid(uid).await
    }

    /// Persists a student's progression counters after recording presences or
    /// adjusting extra activities.
    ///
    /// Writes belt, degrees, extra activities, presence total, and the last
    /// presence timestamp. Profile fields are untouched.
    ///
    /// # Returns
    /// - `Ok(())` - Counters persisted (or no matching student found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn save_progress(&self, student: &Student) -> Result<(), DbErr> {
        entity::prelude::Student::update_many()
            .filter(entity::student::Column::Uid.eq(student.uid.as_str()))
            .col_expr(
                entity::student::Column::Belt,
                sea_orm::sea_query::Expr::value(student.belt.as_str()),
            )
            .col_expr(
                entity::student::Column::Degrees,
                sea_orm::sea_query::Expr::value(student.degrees as i32),
            )
            .col_expr(
                entity::student::Column::ExtraActivities,
                sea_orm::sea_query::Expr::value(student.extra_activities as i32),
            )
            .col_expr(
                entity::student::Column::TotalPresences,
                sea_orm::sea_query::Expr::value(student.total_presences as i32),
            )
            .col_expr(
                entity::student::Column::LastPresenceDate,
                sea_orm::sea_query::Expr::value(student.last_presence_date),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Appends one presence row to a student's history.
    ///
    /// # Returns
    /// - `Ok(())` - Presence recorded
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_presence(
        &self,
        student_uid: &str,
        date: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::Presence::insert(entity::presence::ActiveModel {
            student_uid: ActiveValue::Set(student_uid.to_string()),
            date: ActiveValue::Set(date),
            ..Default::default()
        })
        .exec(self.db)
        .await?;
        Ok(())
    }
}
