//! Class session data repository for database operations.
//!
//! Sessions are identified by the deterministic `class_YYYYMMDD_HHMMSS` id, so
//! two markings in the same second land in the same session and only extend
//! its attendee list.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::class_session::ClassSession;

/// Repository providing database operations for class sessions and their
/// attendee rosters.
pub struct ClassSessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassSessionRepository<'a> {
    /// Creates a new ClassSessionRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a session and appends its attendees.
    ///
    /// The session row is upserted on class_id; attendee rows are inserted
    /// without deduplication because a repeated uid means a second presence.
    ///
    /// # Arguments
    /// - `session` - Session with id, date, instructor, and attendee uids
    ///
    /// # Returns
    /// - `Ok(())` - Session and attendees stored
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, session: &ClassSession) -> Result<(), DbErr> {
        entity::prelude::ClassSession::insert(entity::class_session::ActiveModel {
            class_id: ActiveValue::Set(session.class_id.clone()),
            date: ActiveValue::Set(session.date),
            instructor_uid: ActiveValue::Set(session.instructor_uid.clone()),
        })
        .on_conflict(
            OnConflict::column(entity::class_session::Column::ClassId)
                .update_columns([
                    entity::class_session::Column::Date,
                    entity::class_session::Column::InstructorUid,
                ])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        if session.attendee_uids.is_empty() {
            return Ok(());
        }

        let attendees =
            session
                .attendee_uids
                .iter()
                .map(|uid| entity::class_attendee::ActiveModel {
                    class_id: ActiveValue::Set(session.class_id.clone()),
                    student_uid: ActiveValue::Set(uid.clone()),
                    ..Default::default()
                });

        entity::prelude::ClassAttendee::insert_many(attendees)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Finds a session by class id, including its attendee roster.
    ///
    /// # Returns
    /// - `Ok(Some(ClassSession))` - Session found with attendee uids
    /// - `Ok(None)` - No session with that class id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, class_id: &str) -> Result<Option<ClassSession>, DbErr> {
        let Some(entity) = entity::prelude::ClassSession::find_by_id(class_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let attendees = entity
            .find_related(entity::prelude::ClassAttendee)
            .all(self.db)
            .await?;

        Ok(Some(ClassSession::from_entity(entity, attendees)))
    }

    /// Gets all sessions within an inclusive date range, oldest first, each
    /// with its attendee roster.
    ///
    /// # Returns
    /// - `Ok(Vec<ClassSession>)` - Sessions in the range (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_date_range(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Vec<ClassSession>, DbErr> {
        let rows = entity::prelude::ClassSession::find()
            .find_with_related(entity::prelude::ClassAttendee)
            .filter(entity::class_session::Column::Date.gte(start_date))
            .filter(entity::class_session::Column::Date.lte(end_date))
            .order_by_asc(entity::class_session::Column::Date)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(session, attendees)| ClassSession::from_entity(session, attendees))
            .collect())
    }
}
