use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TeacherDto {
    pub uid: String,
    pub name: String,
    pub email: String,
}

/// Body for registering a teacher. The uid comes from the identity provider
/// the frontend authenticates against.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegisterTeacherDto {
    pub uid: String,
    pub name: String,
    pub email: String,
}
