//! Bearer token authentication guard.
//!
//! Controllers construct an [`AuthGuard`] per request and call
//! [`AuthGuard::require`] with the permissions the endpoint demands. The guard
//! extracts the bearer token from the `Authorization` header, resolves it to a
//! user, and enforces role requirements.

use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{auth_token::AuthTokenRepository, student::StudentRepository, teacher::TeacherRepository},
    error::{auth::AuthError, AppError},
    model::auth::AuthUser,
};

/// Role requirement an endpoint may demand.
pub enum Permission {
    Teacher,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a bearer token to the user it was issued for.
    ///
    /// The uid is looked up in the student collection first, then teachers, so
    /// a uid present in both acts as a student.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - The resolved student or teacher
    /// - `Err(AppError)` - Token unknown, or its user no longer exists
    pub async fn authenticate(&self, token: &str) -> Result<AuthUser, AppError> {
        let Some(user_uid) = AuthTokenRepository::new(self.db)
            .find_user_uid(token)
            .await?
        else {
            return Err(AuthError::InvalidToken.into());
        };

        if let Some(student) = StudentRepository::new(self.db).find_by_uid(&user_uid).await? {
            return Ok(AuthUser::Student(student));
        }

        if let Some(teacher) = TeacherRepository::new(self.db).find_by_uid(&user_uid).await? {
            return Ok(AuthUser::Teacher(teacher));
        }

        Err(AuthError::UserNotFound(user_uid).into())
    }

    /// Authenticates the request and enforces the given permissions.
    ///
    /// # Arguments
    /// - `headers` - Request headers carrying `Authorization: Bearer <token>`
    /// - `permissions` - Roles the endpoint requires
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - The authenticated user satisfying all permissions
    /// - `Err(AppError)` - Missing/invalid token, unknown user, or role denial
    pub async fn require(
        &self,
        headers: &HeaderMap,
        permissions: &[Permission],
    ) -> Result<AuthUser, AppError> {
        let token = bearer_token(headers).ok_or(AuthError::MissingToken)?;
        let user = self.authenticate(token).await?;

        for permission in permissions {
            match permission {
                Permission::Teacher => {
                    if !user.is_teacher() {
                        return Err(AuthError::AccessDenied {
                            uid: user.uid().to_string(),
                            reason: "Endpoint requires the teacher role".to_string(),
                        }
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
}


#[cfg(test)]
mod guard_tests {
    use super::*;
    use axum::http::HeaderValue;
    use test_utils::{builder::TestBuilder, factory};

    use crate::server::error::AppError;

    fn headers_with(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[tokio::test]
    async fn missing_token_is_unauthorized() {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = AuthGuard::new(db).require(&HeaderMap::new(), &[]).await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::MissingToken))
        ));
    }

    #[tokio::test]
    async fn unknown_token_is_invalid() {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = AuthGuard::new(db)
            .require(&headers_with("never-issued"), &[])
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidToken))
        ));
    }

    #[tokio::test]
    async fn token_for_deleted_user_is_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let token = factory::create_auth_token(db, "vanished").await?;

        let result = AuthGuard::new(db)
            .require(&headers_with(&token.token), &[])
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::UserNotFound(_)))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn student_denied_on_teacher_endpoint() -> Result<(), AppError> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let student = factory::create_student(db).await?;
        let token = factory::create_auth_token(db, &student.uid).await?;

        let result = AuthGuard::new(db)
            .require(&headers_with(&token.token), &[Permission::Teacher])
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn teacher_passes_role_check() -> Result<(), AppError> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let teacher = factory::create_teacher(db).await?;
        let token = factory::create_auth_token(db, &teacher.uid).await?;

        let user = AuthGuard::new(db)
            .require(&headers_with(&token.token), &[Permission::Teacher])
            .await?;

        assert!(user.is_teacher());
        assert_eq!(user.uid(), teacher.uid);

        Ok(())
    }

    #[tokio::test]
    async fn uid_in_both_tables_resolves_as_student() -> Result<(), AppError> {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let student = factory::create_student(db).await?;
        factory::teacher::TeacherFactory::new(db)
            .uid(&*student.uid)
            .build()
            .await?;
        let token = factory::create_auth_token(db, &student.uid).await?;

        let user = AuthGuard::new(db)
            .require(&headers_with(&token.token), &[])
            .await?;

        assert!(!user.is_teacher());

        Ok(())
    }
}
