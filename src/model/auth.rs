//! Authentication DTOs.

use serde::{Deserialize, Serialize};

use crate::model::{
    student::{Belt, StudentDto},
    teacher::TeacherDto,
};

/// Role of an authenticated user.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

/// Body for `POST /api/auth/verify-token`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VerifyTokenDto {
    #[serde(rename = "idToken")]
    pub id_token: Option<String>,
}

/// Role-tagged user payload returned by token verification.
///
/// Students get their progression snapshot alongside identity so the frontend
/// can render the dashboard from a single round trip.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum AuthUserDto {
    Student {
        uid: String,
        email: String,
        name: String,
        belt: Belt,
        age: u32,
        total_presences: u32,
        presences_for_next_degree: u32,
    },
    Teacher {
        uid: String,
        email: String,
        name: String,
    },
}

/// Response for `POST /api/auth/register-student`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegisteredStudentDto {
    pub student: StudentDto,
    /// Bearer token issued for the new student.
    pub token: String,
}

/// Response for `POST /api/auth/register-teacher`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegisteredTeacherDto {
    pub teacher: TeacherDto,
    /// Bearer token issued for the new teacher.
    pub token: String,
}
