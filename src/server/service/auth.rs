//! Authentication and registration business logic.
//!
//! Registration creates the user record and issues an opaque bearer token in
//! one step. Token verification resolves the token back to the user with
//! their current progression snapshot.

use rand::Rng;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::{
        auth::{AuthUserDto, RegisteredStudentDto, RegisteredTeacherDto},
        student::CreateStudentDto,
        teacher::RegisterTeacherDto,
    },
    server::{
        data::{auth_token::AuthTokenRepository, student::StudentRepository, teacher::TeacherRepository},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            student::CreateStudentParam,
            teacher::CreateTeacherParam,
        },
    },
};

const TOKEN_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const TOKEN_LENGTH: usize = 32;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a bearer token and returns the user it belongs to.
    ///
    /// # Returns
    /// - `Ok(AuthUserDto)` - Role-tagged user payload
    /// - `Err(AppError)` - Unknown token or user no longer in the system
    pub async fn verify_token(&self, token: &str) -> Result<AuthUserDto, AppError> {
        let user = AuthGuard::new(self.db).authenticate(token).await?;
        Ok(user.into_dto())
    }

    /// Registers a teacher and issues their bearer token.
    ///
    /// # Returns
    /// - `Ok(RegisteredTeacherDto)` - The stored teacher and a fresh token
    /// - `Err(AppError)` - Validation failure or database error
    pub async fn register_teacher(
        &self,
        dto: RegisterTeacherDto,
    ) -> Result<RegisteredTeacherDto, AppError> {
        require_nonempty("uid", &dto.uid)?;
        require_nonempty("name", &dto.name)?;
        require_nonempty("email", &dto.email)?;

        let teacher = TeacherRepository::new(self.db)
            .upsert(CreateTeacherParam {
                uid: dto.uid,
                name: dto.name,
                email: dto.email,
            })
            .await?;

        let token = generate_token();
        AuthTokenRepository::new(self.db)
            .create(&token, &teacher.uid)
            .await?;

        Ok(RegisteredTeacherDto {
            teacher: teacher.into_dto(),
            token,
        })
    }

    /// Registers a student and issues their bearer token.
    ///
    /// A uid is generated when the client does not supply one. Progression
    /// counters start at zero and the start date defaults to today.
    ///
    /// # Returns
    /// - `Ok(RegisteredStudentDto)` - The stored student and a fresh token
    /// - `Err(AppError)` - Validation failure or database error
    pub async fn register_student(
        &self,
        dto: CreateStudentDto,
    ) -> Result<RegisteredStudentDto, AppError> {
        require_nonempty("name", &dto.name)?;
        require_nonempty("email", &dto.email)?;

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

        let token = generate_token();
        AuthTokenRepository::new(self.db)
            .create(&token, &student.uid)
            .await?;

        Ok(RegisteredStudentDto {
            student: student.into_dto(),
            token,
        })
    }
}

fn require_nonempty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("Field '{field}' is required")));
    }
    Ok(())
}

/// Generates a random alphanumeric bearer token.
fn generate_token() -> String {
    let mut rng = rand::rng();
    (0..TOKEN_LENGTH)
        .map(|_| TOKEN_CHARSET[rng.random_range(0..TOKEN_CHARSET.len())] as char)
        .collect()
}
