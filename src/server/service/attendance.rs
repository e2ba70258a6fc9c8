//! Attendance marking and class session business logic.
//!
//! Marking attendance is the operation that drives the whole progression
//! system: each marked uid becomes one presence row, one counter increment,
//! and possibly a degree advancement. Unknown uids are collected as per-entry
//! errors instead of failing the batch.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::attendance::{
        AttendanceHistoryDto, ClassAttendeeDto, ClassListDto, ClassSessionDto,
        MarkAttendanceDto, MarkAttendanceResultDto,
    },
    server::{
        data::{class_session::ClassSessionRepository, student::StudentRepository},
        error::AppError,
        model::{class_session::ClassSession, student::Student},
    },
};

/// Default page size for attendance history queries.
const DEFAULT_HISTORY_LIMIT: u64 = 50;

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks attendance for a batch of students and records the class session.
    ///
    /// Each uid in the batch counts as one presence; a uid listed twice gets
    /// two. Students are re-read per entry so duplicate entries accumulate
    /// correctly. Unknown uids land in the `errors` list and the rest of the
    /// batch proceeds.
    ///
    /// # Arguments
    /// - `instructor_uid` - The teacher who marked the attendance
    /// - `dto` - Batch of student uids and an optional session date
    ///
    /// # Returns
    /// - `Ok(MarkAttendanceResultDto)` - Class id, updated students, per-entry errors
    /// - `Err(AppError)` - Empty batch or database error
    pub async fn mark(
        &self,
        instructor_uid: &str,
        dto: MarkAttendanceDto,
    ) -> Result<MarkAttendanceResultDto, AppError> {
        if dto.student_uids.is_empty() {
            return Err(AppError::BadRequest(
                "Field 'student_uids' must not be empty".to_string(),
            ));
        }

        let date = dto.date.unwrap_or_else(Utc::now);
        let class_id = ClassSession::id_for(date);

        let student_repo = StudentRepository::new(self.db);
        let mut updated: Vec<Student> = Vec::new();
        let mut attendee_uids = Vec::new();
        let mut errors = Vec::new();

        for uid in &dto.student_uids {
            let Some(mut student) = student_repo.find_by_uid(uid).await? else {
                errors.push(format!("Student {uid} not found"));
                continue;
            };

            let advanced = student.record_presence(date);
            student_repo.save_progress(&student).await?;
            student_repo.insert_presence(uid, date).await?;

            if advanced {
                tracing::info!(
                    "Student {} advanced to degree {} on {} belt",
                    student.uid,
                    student.degrees,
                    student.belt
                );
            }

            attendee_uids.push(uid.clone());
            // A duplicate uid replaces its earlier snapshot in the response.
            if let Some(existing) = updated.iter_mut().find(|s| s.uid == *uid) {
                *existing = student;
            } else {
                updated.push(student);
            }
        }

        let session = ClassSession {
            class_id: class_id.clone(),
            date,
            instructor_uid: instructor_uid.to_string(),
            attendee_uids,
        };
        ClassSessionRepository::new(self.db).create(&session).await?;

        Ok(MarkAttendanceResultDto {
            message: "Attendance marked successfully".to_string(),
            class_id,
            updated_students: updated.into_iter().map(|s| s.into_dto()).collect(),
            errors,
        })
    }

    /// Gets a page of a student's presence history in chronological order.
    ///
    /// # Arguments
    /// - `uid` - Student uid
    /// - `limit` - Page size, defaulting to 50
    /// - `offset` - Entries to skip from the oldest end
    ///
    /// # Returns
    /// - `Ok(AttendanceHistoryDto)` - Page of timestamps plus a has_more flag
    /// - `Err(AppError)` - Student not found or database error
    pub async fn history(
        &self,
        uid: &str,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<AttendanceHistoryDto, AppError> {
        let student = StudentRepository::new(self.db)
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student {uid} not found")))?;

        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT) as usize;
        let offset = offset.unwrap_or(0) as usize;

        let total = student.history_presences.len();
        let history: Vec<DateTime<Utc>> = student
            .history_presences
            .iter()
            .skip(offset)
            .take(limit)
            .copied()
            .collect();
        let has_more = offset.saturating_add(limit) < total;

        let presences_for_next_degree = student.presences_for_next_degree();

        Ok(AttendanceHistoryDto {
            student_uid: student.uid,
            student_name: student.name,
            total_presences: student.total_presences,
            presences_for_next_degree,
            history,
            has_more,
        })
    }

    /// Gets one class session with its attendee summaries.
    ///
    /// Attendees are listed once each in first-marked order; the attendance
    /// count still reflects every marking. Attendees deleted since the class
    /// are omitted from the summaries.
    ///
    /// # Returns
    /// - `Ok(ClassSessionDto)` - Session detail with resolved attendees
    /// - `Err(AppError)` - Class not found or database error
    pub async fn get_class(&self, class_id: &str) -> Result<ClassSessionDto, AppError> {
        let session = ClassSessionRepository::new(self.db)
            .get_by_id(class_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Class {class_id} not found")))?;

        let student_repo = StudentRepository::new(self.db);
        let mut attendees: Vec<ClassAttendeeDto> = Vec::new();

        for uid in &session.attendee_uids {
            if attendees.iter().any(|a| a.uid == *uid) {
                continue;
            }
            if let Some(student) = student_repo.find_by_uid(uid).await? {
                attendees.push(ClassAttendeeDto {
                    uid: student.uid,
                    name: student.name,
                    belt: student.belt,
                    total_presences: student.total_presences,
                });
            }
        }

        Ok(session.into_dto(attendees))
    }

    /// Gets class session summaries within an inclusive date range.
    ///
    /// # Returns
    /// - `Ok(ClassListDto)` - Summaries oldest first plus a count
    /// - `Err(AppError)` - Inverted range or database error
    pub async fn get_classes(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<ClassListDto, AppError> {
        if start_date > end_date {
            return Err(AppError::BadRequest(
                "'start_date' must not be after 'end_date'".to_string(),
            ));
        }

        let sessions = ClassSessionRepository::new(self.db)
            .get_by_date_range(start_date, end_date)
            .await?;

        let classes: Vec<_> = sessions
            .into_iter()
            .map(ClassSession::into_summary_dto)
            .collect();
        let count = classes.len() as u64;

        Ok(ClassListDto { classes, count })
    }
}
