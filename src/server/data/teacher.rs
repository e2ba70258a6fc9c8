//! Teacher data repository for database operations.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::teacher::{CreateTeacherParam, Teacher};

/// Repository providing database operations for teacher management.
pub struct TeacherRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherRepository<'a> {
    /// Creates a new TeacherRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a teacher from parameter model.
    ///
    /// Registering the same uid again refreshes name and email instead of
    /// failing, so re-registration after a frontend retry is harmless.
    ///
    /// # Returns
    /// - `Ok(Teacher)` - The created or updated teacher
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: CreateTeacherParam) -> Result<Teacher, DbErr> {
        let entity = entity::prelude::Teacher::insert(entity::teacher::ActiveModel {
            uid: ActiveValue::Set(param.uid),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
        })
        .on_conflict(
            OnConflict::column(entity::teacher::Column::Uid)
                .update_columns([
                    entity::teacher::Column::Name,
                    entity::teacher::Column::Email,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Teacher::from_entity(entity))
    }

    /// Finds a teacher by uid.
    ///
    /// # Returns
    /// - `Ok(Some(Teacher))` - Teacher found
    /// - `Ok(None)` - No teacher with that uid
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_uid(&self, uid: &str) -> Result<Option<Teacher>, DbErr> {
        let entity = entity::prelude::Teacher::find_by_id(uid).one(self.db).await?;

        Ok(entity.map(Teacher::from_entity))
    }
}
