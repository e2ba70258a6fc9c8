//! Student domain model, parameters, and belt progression arithmetic.
//!
//! The progression rule is the one piece of real business logic in this
//! backend: each belt requires a fixed number of presences per degree, with a
//! reduced requirement for degrees backed by an extra activity. Everything
//! here is pure arithmetic over the student's counters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::student::{Belt, StudentDto},
    server::error::internal::InternalError,
};

/// Maximum degree count on a belt before the student moves to the next belt.
pub const MAX_DEGREES: u32 = 4;

/// Students within this many presences of their next degree count as "close
/// to graduation".
pub const CLOSE_TO_GRADUATION_MAX_PRESENCES: u32 = 10;

/// Presences required for one degree, in both tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeRequirement {
    /// Requirement without an extra activity backing the degree.
    pub normal: u32,
    /// Reduced requirement when an extra activity backs the degree.
    pub with_activity: u32,
}

impl Belt {
    /// Per-degree presence requirement for this belt.
    ///
    /// Returns `None` for the black belt, whose progression is time-based and
    /// exempt from presence counting.
    pub fn degree_requirement(&self) -> Option<DegreeRequirement> {
        match self {
            Belt::Branca => Some(DegreeRequirement {
                normal: 50,
                with_activity: 45,
            }),
            Belt::Azul => Some(DegreeRequirement {
                normal: 90,
                with_activity: 85,
            }),
            Belt::Roxa => Some(DegreeRequirement {
                normal: 70,
                with_activity: 65,
            }),
            Belt::Marrom => Some(DegreeRequirement {
                normal: 80,
                with_activity: 70,
            }),
            Belt::Preta => None,
        }
    }

    /// The belt that follows this one. The black belt is terminal.
    pub fn next(&self) -> Belt {
        match self {
            Belt::Branca => Belt::Azul,
            Belt::Azul => Belt::Roxa,
            Belt::Roxa => Belt::Marrom,
            Belt::Marrom => Belt::Preta,
            Belt::Preta => Belt::Preta,
        }
    }
}

/// Student with identity, belt progression state, and presence history.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub uid: String,
    pub name: String,
    pub email: String,
    pub belt: Belt,
    pub age: u32,
    pub address: String,
    pub education: String,
    /// Degrees earned on the current belt, 0 to [`MAX_DEGREES`].
    pub degrees: u32,
    pub start_date: NaiveDate,
    pub photo_url: String,
    /// Extra-activity credits accumulated on the current belt.
    pub extra_activities: u32,
    pub total_presences: u32,
    pub last_presence_date: Option<DateTime<Utc>>,
    /// Presence timestamps, oldest first.
    pub history_presences: Vec<DateTime<Utc>>,
}

impl Student {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    /// - `history_presences` - Presence timestamps for this student, oldest first
    ///
    /// # Returns
    /// - `Ok(Student)` - The converted student domain model
    /// - `Err(InternalError)` - Stored belt value is unknown or a counter
    ///   column is negative
    pub fn from_entity(
        entity: entity::student::Model,
        history_presences: Vec<DateTime<Utc>>,
    ) -> Result<Self, InternalError> {
        let belt = Belt::parse(&entity.belt).ok_or_else(|| InternalError::UnknownBelt {
            value: entity.belt.clone(),
        })?;

        Ok(Self {
            uid: entity.uid,
            name: entity.name,
            email: entity.email,
            belt,
            age: counter("age", entity.age)?,
            address: entity.address,
            education: entity.education,
            degrees: counter("degrees", entity.degrees)?,
            start_date: entity.start_date,
            photo_url: entity.photo_url,
            extra_activities: counter("extra_activities", entity.extra_activities)?,
            total_presences: counter("total_presences", entity.total_presences)?,
            last_presence_date: entity.last_presence_date,
            history_presences,
        })
    }

    /// Presences still missing before the next degree.
    ///
    /// The required total at the current degree is the sum, for each degree
    /// index from 0 to the current degree inclusive, of the applicable tier's
    /// requirement: the reduced tier applies to a degree index when the
    /// student's extra-activity credits exceed that index. The result is
    /// clamped at zero and black belts always get 0.
    pub fn presences_for_next_degree(&self) -> u32 {
        let Some(requirement) = self.belt.degree_requirement() else {
            return 0;
        };

        let mut required_total = 0;
        for degree in 0..=self.degrees {
            required_total += if self.extra_activities > degree {
                requirement.with_activity
            } else {
                requirement.normal
            };
        }

        required_total.saturating_sub(self.total_presences)
    }

    /// Whether the student finished all degrees and qualifies for the next
    /// belt.
    pub fn is_ready_for_next_belt(&self) -> bool {
        self.degrees >= MAX_DEGREES && self.presences_for_next_degree() == 0
    }

    /// Whether an extra activity would close the gap to the next degree.
    ///
    /// Compares the cumulative requirement under the reduced tier for every
    /// degree up to the current one against the normal-tier total: true when
    /// the student's presences satisfy the former but not the latter. Black
    /// belts never graduate through activities.
    pub fn can_graduate_with_activity(&self) -> bool {
        let Some(requirement) = self.belt.degree_requirement() else {
            return false;
        };

        let total_with_activity = requirement.with_activity * (self.degrees + 1);
        let total_without_activity = requirement.normal * (self.degrees + 1);

        self.total_presences >= total_with_activity
            && self.total_presences < total_without_activity
    }

    /// Records one presence and applies degree advancement.
    ///
    /// Increments the presence counter, stamps the presence date, and appends
    /// to the history. When the requirement for the current degree is met and
    /// the student is below [`MAX_DEGREES`], the degree advances by exactly
    /// one. Black belts never auto-advance; their degrees are time-governed.
    ///
    /// # Returns
    /// - `true` - The presence completed a degree and the student advanced
    /// - `false` - No degree change
    pub fn record_presence(&mut self, date: DateTime<Utc>) -> bool {
        self.total_presences += 1;
        self.last_presence_date = Some(date);
        self.history_presences.push(date);

        if self.belt.degree_requirement().is_some()
            && self.presences_for_next_degree() == 0
            && self.degrees < MAX_DEGREES
        {
            self.degrees += 1;
            return true;
        }

        false
    }

    /// Converts the student domain model to a DTO for API responses,
    /// computing the derived progression fields.
    pub fn into_dto(self) -> StudentDto {
        let presences_for_next_degree = self.presences_for_next_degree();
        let ready_for_next_belt = self.is_ready_for_next_belt();
        let can_graduate_with_activity = self.can_graduate_with_activity();
        let next_belt = self.belt.next();

        StudentDto {
            uid: self.uid,
            name: self.name,
            email: self.email,
            belt: self.belt,
            age: self.age,
            address: self.address,
            education: self.education,
            degrees: self.degrees,
            start_date: self.start_date,
            photo_url: self.photo_url,
            extra_activities: self.extra_activities,
            total_presences: self.total_presences,
            last_presence_date: self.last_presence_date,
            history_presences: self.history_presences,
            presences_for_next_degree,
            next_belt,
            ready_for_next_belt,
            can_graduate_with_activity,
        }
    }
}

fn counter(column: &'static str, value: i32) -> Result<u32, InternalError> {
    u32::try_from(value).map_err(|_| InternalError::NegativeCounter { column, value })
}

/// Parameters for creating a student.
#[derive(Debug, Clone)]
pub struct CreateStudentParam {
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
}

/// Parameters for a partial student update; `None` fields are unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateStudentParam {
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn student(belt: Belt, degrees: u32, extra_activities: u32, total_presences: u32) -> Student {
        Student {
            uid: "student-1".to_string(),
            name: "Test Student".to_string(),
            email: "student@example.com".to_string(),
            belt,
            age: 20,
            address: String::new(),
            education: String::new(),
            degrees,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            photo_url: String::new(),
            extra_activities,
            total_presences,
            last_presence_date: None,
            history_presences: Vec::new(),
        }
    }

    #[test]
    fn fresh_white_belt_needs_full_requirement() {
        let s = student(Belt::Branca, 0, 0, 0);
        assert_eq!(s.presences_for_next_degree(), 50);
    }

    #[test]
    fn reduced_tier_applies_per_covered_degree() {
        // extra_activities=2 covers degree indices 0 and 1: 45+45=90 required.
        let s = student(Belt::Branca, 1, 2, 80);
        assert_eq!(s.presences_for_next_degree(), 10);
    }

    #[test]
    fn mixed_tiers_sum_per_degree() {
        // Index 0 covered (45), index 1 not (50): 95 required.
        let s = student(Belt::Branca, 1, 1, 0);
        assert_eq!(s.presences_for_next_degree(), 95);
    }

    #[test]
    fn remaining_is_never_negative() {
        let s = student(Belt::Branca, 0, 0, 10_000);
        assert_eq!(s.presences_for_next_degree(), 0);

        let s = student(Belt::Marrom, 4, 9, 10_000);
        assert_eq!(s.presences_for_next_degree(), 0);
    }

    #[test]
    fn black_belt_always_has_zero_remaining() {
        let s = student(Belt::Preta, 0, 0, 0);
        assert_eq!(s.presences_for_next_degree(), 0);

        let s = student(Belt::Preta, 3, 7, 123);
        assert_eq!(s.presences_for_next_degree(), 0);
    }

    #[test]
    fn presence_at_threshold_advances_exactly_one_degree() {
        let mut s = student(Belt::Branca, 0, 0, 49);
        let advanced = s.record_presence(Utc.with_ymd_and_hms(2026, 3, 2, 19, 0, 0).unwrap());

        assert!(advanced);
        assert_eq!(s.degrees, 1);
        assert_eq!(s.total_presences, 50);
        assert_eq!(s.history_presences.len(), 1);
        assert!(s.last_presence_date.is_some());
    }

    #[test]
    fn presence_below_threshold_does_not_advance() {
        let mut s = student(Belt::Branca, 0, 0, 10);
        let advanced = s.record_presence(Utc::now());

        assert!(!advanced);
        assert_eq!(s.degrees, 0);
        assert_eq!(s.total_presences, 11);
    }

    #[test]
    fn degrees_cap_at_four() {
        let mut s = student(Belt::Branca, 4, 0, 10_000);
        let advanced = s.record_presence(Utc::now());

        assert!(!advanced);
        assert_eq!(s.degrees, 4);
    }

    #[test]
    fn black_belt_never_auto_advances() {
        let mut s = student(Belt::Preta, 0, 0, 500);
        let advanced = s.record_presence(Utc::now());

        assert!(!advanced);
        assert_eq!(s.degrees, 0);
        assert_eq!(s.total_presences, 501);
    }

    #[test]
    fn ready_for_next_belt_requires_four_completed_degrees() {
        // 5 * 50 = 250 presences complete degree 4 on branca.
        let s = student(Belt::Branca, 4, 0, 250);
        assert!(s.is_ready_for_next_belt());

        let s = student(Belt::Branca, 4, 0, 249);
        assert!(!s.is_ready_for_next_belt());

        let s = student(Belt::Branca, 3, 0, 250);
        assert!(!s.is_ready_for_next_belt());
    }

    #[test]
    fn belt_progression_order() {
        assert_eq!(Belt::Branca.next(), Belt::Azul);
        assert_eq!(Belt::Azul.next(), Belt::Roxa);
        assert_eq!(Belt::Roxa.next(), Belt::Marrom);
        assert_eq!(Belt::Marrom.next(), Belt::Preta);
        assert_eq!(Belt::Preta.next(), Belt::Preta);
    }

    #[test]
    fn can_graduate_with_activity_inside_window() {
        // Between 45 (reduced) and 50 (normal) for degree 0 on branca.
        let s = student(Belt::Branca, 0, 0, 45);
        assert!(s.can_graduate_with_activity());

        let s = student(Belt::Branca, 0, 0, 49);
        assert!(s.can_graduate_with_activity());
    }

    #[test]
    fn can_graduate_with_activity_outside_window() {
        let s = student(Belt::Branca, 0, 0, 44);
        assert!(!s.can_graduate_with_activity());

        // At the normal-tier total the activity is unnecessary.
        let s = student(Belt::Branca, 0, 0, 50);
        assert!(!s.can_graduate_with_activity());

        let s = student(Belt::Preta, 0, 0, 45);
        assert!(!s.can_graduate_with_activity());
    }

    #[test]
    fn from_entity_rejects_unknown_belt() {
        let entity = entity::student::Model {
            uid: "s1".to_string(),
            name: "S".to_string(),
            email: "s@example.com".to_string(),
            belt: "verde".to_string(),
            age: 20,
            address: String::new(),
            education: String::new(),
            degrees: 0,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            photo_url: String::new(),
            extra_activities: 0,
            total_presences: 0,
            last_presence_date: None,
        };

        let result = Student::from_entity(entity, Vec::new());
        assert!(matches!(result, Err(InternalError::UnknownBelt { .. })));
    }

    #[test]
    fn from_entity_rejects_negative_counters() {
        let entity = entity::student::Model {
            uid: "s1".to_string(),
            name: "S".to_string(),
            email: "s@example.com".to_string(),
            belt: "branca".to_string(),
            age: 20,
            address: String::new(),
            education: String::new(),
            degrees: -1,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            photo_url: String::new(),
            extra_activities: 0,
            total_presences: 0,
            last_presence_date: None,
        };

        let result = Student::from_entity(entity, Vec::new());
        assert!(matches!(
            result,
            Err(InternalError::NegativeCounter {
                column: "degrees",
                ..
            })
        ));
    }

    #[test]
    fn dto_carries_derived_progression_fields() {
        let dto = student(Belt::Branca, 1, 2, 80).into_dto();

        assert_eq!(dto.presences_for_next_degree, 10);
        assert_eq!(dto.next_belt, Belt::Azul);
        assert!(!dto.ready_for_next_belt);
    }
}
