//! Student DTOs and the belt rank enumeration.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Belt rank, ordered from lowest to highest.
///
/// Serializes with the school's traditional Portuguese names ("branca",
/// "azul", ...), which are also the values stored in the database.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Belt {
    Branca,
    Azul,
    Roxa,
    Marrom,
    Preta,
}

impl Belt {
    /// The wire/database name of the belt.
    pub fn as_str(&self) -> &'static str {
        match self {
            Belt::Branca => "branca",
            Belt::Azul => "azul",
            Belt::Roxa => "roxa",
            Belt::Marrom => "marrom",
            Belt::Preta => "preta",
        }
    }

    /// Parses a stored belt name. Returns `None` for unknown values.
    pub fn parse(value: &str) -> Option<Belt> {
        match value {
            "branca" => Some(Belt::Branca),
            "azul" => Some(Belt::Azul),
            "roxa" => Some(Belt::Roxa),
            "marrom" => Some(Belt::Marrom),
            "preta" => Some(Belt::Preta),
            _ => None,
        }
    }
}

impl std::fmt::Display for Belt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full student document returned by the API.
///
/// Includes the derived progression fields so clients never re-implement the
/// graduation arithmetic.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StudentDto {
    pub uid: String,
    pub name: String,
    pub email: String,
    pub belt: Belt,
    pub age: u32,
    pub address: String,
    pub education: String,
    pub degrees: u32,
    pub start_date: NaiveDate,
    pub photo_url: String,
    pub extra_activities: u32,
    pub total_presences: u32,
    pub last_presence_date: Option<DateTime<Utc>>,
    pub history_presences: Vec<DateTime<Utc>>,
    /// Presences still missing before the next degree (0 for black belts).
    pub presences_for_next_degree: u32,
    pub next_belt: Belt,
    pub ready_for_next_belt: bool,
    pub can_graduate_with_activity: bool,
}

/// Body for creating a student. Optional fields default to empty/zero.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateStudentDto {
    /// Optional uid; generated server-side when registering through
    /// `/api/auth/register-student`.
    #[serde(default)]
    pub uid: Option<String>,
    pub name: String,
    pub email: String,
    pub belt: Belt,
    pub age: u32,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub degrees: u32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default)]
    pub extra_activities: u32,
}

/// Body for a teacher-initiated partial update; absent fields are unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UpdateStudentDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub belt: Option<Belt>,
    pub age: Option<u32>,
    pub address: Option<String>,
    pub education: Option<String>,
    pub degrees: Option<u32>,
    pub start_date: Option<NaiveDate>,
    pub photo_url: Option<String>,
    pub extra_activities: Option<u32>,
}

/// Body for a student updating their own profile. Only personal fields are
/// accepted; progression state cannot be self-edited.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub address: Option<String>,
    pub education: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StudentListDto {
    pub students: Vec<StudentDto>,
}
