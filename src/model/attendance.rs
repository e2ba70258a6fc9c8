//! Attendance and class session DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::student::{Belt, StudentDto};

/// Body for `POST /api/attendance/mark`.
///
/// Duplicate uids are deliberately honored: each entry records one presence.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MarkAttendanceDto {
    pub student_uids: Vec<String>,
    /// Session date; defaults to now when omitted.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MarkAttendanceResultDto {
    pub message: String,
    pub class_id: String,
    pub updated_students: Vec<StudentDto>,
    /// Per-uid failures (unknown students); never fails the whole request.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// Query string for attendance history pagination.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct HistoryQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AttendanceHistoryDto {
    pub student_uid: String,
    pub student_name: String,
    pub total_presences: u32,
    pub presences_for_next_degree: u32,
    pub history: Vec<DateTime<Utc>>,
    pub has_more: bool,
}

/// Attendee summary inside a class session detail.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClassAttendeeDto {
    pub uid: String,
    pub name: String,
    pub belt: Belt,
    pub total_presences: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClassSessionDto {
    pub class_id: String,
    pub date: DateTime<Utc>,
    pub instructor_uid: String,
    pub attended_students_count: u64,
    pub attended_students: Vec<ClassAttendeeDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClassSummaryDto {
    pub class_id: String,
    pub date: DateTime<Utc>,
    pub instructor_uid: String,
    pub attended_students_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClassListDto {
    pub classes: Vec<ClassSummaryDto>,
    pub count: u64,
}

/// Query string for `GET /api/attendance/classes`; both bounds are required
/// and validated in the controller.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ClassRangeQuery {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}
