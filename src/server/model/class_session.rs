//! Class session domain model and identifier generation.

use chrono::{DateTime, Utc};

use crate::model::attendance::{ClassAttendeeDto, ClassSessionDto, ClassSummaryDto};

/// A training session with the roster of students who attended.
///
/// Attendee uids may repeat when a student was marked twice in one session;
/// each occurrence counted as a separate presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSession {
    pub class_id: String,
    pub date: DateTime<Utc>,
    pub instructor_uid: String,
    pub attendee_uids: Vec<String>,
}

impl ClassSession {
    /// Builds the deterministic session identifier for a timestamp, in the
    /// form `class_YYYYMMDD_HHMMSS`.
    pub fn id_for(date: DateTime<Utc>) -> String {
        format!("class_{}", date.format("%Y%m%d_%H%M%S"))
    }

    /// Converts an entity model and its attendee rows to a domain model.
    pub fn from_entity(
        entity: entity::class_session::Model,
        attendees: Vec<entity::class_attendee::Model>,
    ) -> Self {
        Self {
            class_id: entity.class_id,
            date: entity.date,
            instructor_uid: entity.instructor_uid,
            attendee_uids: attendees.into_iter().map(|a| a.student_uid).collect(),
        }
    }

    /// Converts the session to a summary DTO for range listings.
    pub fn into_summary_dto(self) -> ClassSummaryDto {
        ClassSummaryDto {
            class_id: self.class_id,
            date: self.date,
            instructor_uid: self.instructor_uid,
            attended_students_count: self.attendee_uids.len() as u64,
        }
    }

    /// Converts the session to a detail DTO with resolved attendee summaries.
    pub fn into_dto(self, attended_students: Vec<ClassAttendeeDto>) -> ClassSessionDto {
        ClassSessionDto {
            class_id: self.class_id,
            date: self.date,
            instructor_uid: self.instructor_uid,
            attended_students_count: self.attendee_uids.len() as u64,
            attended_students,
        }
    }
}
