//! Student management business logic.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::student::{
        CreateStudentDto, StudentDto, StudentListDto, UpdateProfileDto, UpdateStudentDto,
    },
    server::{
        data::student::StudentRepository,
        error::AppError,
        model::student::{
            CreateStudentParam, Student, UpdateStudentParam, CLOSE_TO_GRADUATION_MAX_PRESENCES,
        },
    },
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all students with their progression snapshots.
    pub async fn get_all(&self) -> Result<StudentListDto, AppError> {
        let students = StudentRepository::new(self.db).get_all().await?;

        Ok(StudentListDto {
            students: students.into_iter().map(Student::into_dto).collect(),
        })
    }

    /// Gets one student by uid.
    ///
    /// # Returns
    /// - `Ok(StudentDto)` - The student with derived progression fields
    /// - `Err(AppError)` - Not found or database error
    pub async fn get(&self, uid: &str) -> Result<StudentDto, AppError> {
        let student = StudentRepository::new(self.db)
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student {uid} not found")))?;

        Ok(student.into_dto())
    }

    /// Creates a student from a teacher-submitted form.
    ///
    /// A uid is generated when the form does not carry one.
    pub async fn create(&self, dto: CreateStudentDto) -> Result<StudentDto, AppError> {
        if dto.name.trim().is_empty() || dto.email.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Fields 'name' and 'email' are required".to_string(),
            ));
        }

        let uid = dto
            .uid
            .filter(|uid| !uid.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let student = StudentRepository::new(self.db)
            .create(CreateStudentParam {
                uid,
                name: dto.name,
                email: dto.email,
                belt: dto.belt,
                age: dto.age,
                address: dto.address,
                education: dto.education,
                degrees: dto.degrees,
                start_date: dto
                    .start_date
                    .unwrap_or_else(|| chrono::Utc::now().date_naive()),
                photo_url: dto.photo_url,
                extra_activities: dto.extra_activities,
            })
            .await?;

        Ok(student.into_dto())
    }

    /// Applies a teacher-initiated partial update to a student.
    ///
    /// # Returns
    /// - `Ok(StudentDto)` - The updated student
    /// - `Err(AppError)` - Not found or database error
    pub async fn update(&self, uid: &str, dto: UpdateStudentDto) -> Result<StudentDto, AppError> {
        let student = StudentRepository::new(self.db)
            .update(
                uid,
                UpdateStudentParam {
                    name: dto.name,
                    email: dto.email,
                    belt: dto.belt,
                    age: dto.age,
                    address: dto.address,
                    education: dto.education,
                    degrees: dto.degrees,
                    start_date: dto.start_date,
                    photo_url: dto.photo_url,
                    extra_activities: dto.extra_activities,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student {uid} not found")))?;

        Ok(student.into_dto())
    }

    /// Applies a student's self-service profile update.
    ///
    /// Only personal fields can change; belt, degrees, and counters are
    /// ignored even if a tampered client sends them.
    pub async fn update_profile(
        &self,
        uid: &str,
        dto: UpdateProfileDto,
    ) -> Result<StudentDto, AppError> {
        let student = StudentRepository::new(self.db)
            .update(
                uid,
                UpdateStudentParam {
                    name: dto.name,
                    address: dto.address,
                    education: dto.education,
                    photo_url: dto.photo_url,
                    ..Default::default()
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student {uid} not found")))?;

        Ok(student.into_dto())
    }

    /// Grants one extra-activity credit to a student.
    ///
    /// Black belts are exempt from presence counting, so credits are
    /// meaningless for them and rejected.
    pub async fn add_extra_activity(&self, uid: &str) -> Result<StudentDto, AppError> {
        let repo = StudentRepository::new(self.db);
        let mut student = repo
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student {uid} not found")))?;

        if student.belt.degree_requirement().is_none() {
            return Err(AppError::BadRequest(
                "Black belt progression is time-based and does not use extra activities"
                    .to_string(),
            ));
        }

        student.extra_activities += 1;
        repo.save_progress(&student).await?;

        Ok(student.into_dto())
    }

    /// Revokes one extra-activity credit from a student.
    pub async fn remove_extra_activity(&self, uid: &str) -> Result<StudentDto, AppError> {
        let repo = StudentRepository::new(self.db);
        let mut student = repo
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student {uid} not found")))?;

        if student.extra_activities == 0 {
            return Err(AppError::BadRequest(
                "Student has no extra activities to remove".to_string(),
            ));
        }

        student.extra_activities -= 1;
        repo.save_progress(&student).await?;

        Ok(student.into_dto())
    }

    /// Gets students within ten presences of their next degree.
    ///
    /// Students already at zero remaining are excluded; they have graduated
    /// rather than being close to it.
    pub async fn close_to_graduation(&self) -> Result<StudentListDto, AppError> {
        let students = StudentRepository::new(self.db).get_all().await?;

        let students = students
            .into_iter()
            .filter(|s| {
                let remaining = s.presences_for_next_degree();
                remaining > 0 && remaining <= CLOSE_TO_GRADUATION_MAX_PRESENCES
            })
            .map(Student::into_dto)
            .collect();

        Ok(StudentListDto { students })
    }
}
