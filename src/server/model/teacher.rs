use crate::model::teacher::TeacherDto;

/// Teacher with identity information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub uid: String,
    pub name: String,
    pub email: String,
}

impl Teacher {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::teacher::Model) -> Self {
        Self {
            uid: entity.uid,
            name: entity.name,
            email: entity.email,
        }
    }

    /// Converts the teacher domain model to a DTO for API responses.
    pub fn into_dto(self) -> TeacherDto {
        TeacherDto {
            uid: self.uid,
            name: self.name,
            email: self.email,
        }
    }
}

/// Parameters for registering a teacher.
#[derive(Debug, Clone)]
pub struct CreateTeacherParam {
    pub uid: String,
    pub name: String,
    pub email: String,
}
