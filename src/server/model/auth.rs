//! Authenticated user domain model.

use crate::{
    model::auth::{AuthUserDto, Role},
    server::model::{student::Student, teacher::Teacher},
};

/// A user resolved from a bearer token, carrying their full record.
///
/// Resolution checks the student collection first, then teachers, so a uid
/// present in both acts as a student.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthUser {
    Student(Student),
    Teacher(Teacher),
}

impl AuthUser {
    pub fn uid(&self) -> &str {
        match self {
            AuthUser::Student(s) => &s.uid,
            AuthUser::Teacher(t) => &t.uid,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            AuthUser::Student(_) => Role::Student,
            AuthUser::Teacher(_) => Role::Teacher,
        }
    }

    pub fn is_teacher(&self) -> bool {
        matches!(self, AuthUser::Teacher(_))
    }

    /// Whether this user may read the student identified by `uid`. Teachers
    /// see everyone; students only themselves.
    pub fn can_access_student(&self, uid: &str) -> bool {
        match self {
            AuthUser::Teacher(_) => true,
            AuthUser::Student(s) => s.uid == uid,
        }
    }

    /// Converts to the role-tagged DTO returned by token verification.
    pub fn into_dto(self) -> AuthUserDto {
        match self {
            AuthUser::Student(s) => {
                let presences_for_next_degree = s.presences_for_next_degree();
                AuthUserDto::Student {
                    uid: s.uid,
                    email: s.email,
                    name: s.name,
                    belt: s.belt,
                    age: s.age,
                    total_presences: s.total_presences,
                    presences_for_next_degree,
                }
            }
            AuthUser::Teacher(t) => AuthUserDto::Teacher {
                uid: t.uid,
                email: t.email,
                name: t.name,
            },
        }
    }
}
