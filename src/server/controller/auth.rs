use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{auth::VerifyTokenDto, student::CreateStudentDto, teacher::RegisterTeacherDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::auth::AuthService,
        state::AppState,
    },
};

/// POST /api/auth/verify-token - Resolve a bearer token to its user
///
/// Accepts the token in the request body and returns the role-tagged user
/// payload. Students get their progression snapshot included.
///
/// # Authentication
/// The token under verification is itself the credential.
///
/// # Returns
/// - `200 OK`: AuthUserDto tagged with the user's role
/// - `400 Bad Request`: Token missing from the body
/// - `401 Unauthorized`: Token unknown
/// - `404 Not Found`: Token user no longer exists in the system
pub async fn verify_token(
    State(state): State<AppState>,
    Json(dto): Json<VerifyTokenDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = dto
        .id_token
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Field 'idToken' is required".to_string()))?;

    let user = AuthService::new(&state.db).verify_token(&token).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// POST /api/auth/register-teacher - Register a teacher and issue a token
///
/// # Authentication
/// None; the uid comes from the identity provider the frontend uses.
///
/// # Returns
/// - `201 Created`: RegisteredTeacherDto with the stored teacher and token
/// - `400 Bad Request`: Missing uid, name, or email
pub async fn register_teacher(
    State(state): State<AppState>,
    Json(dto): Json<RegisterTeacherDto>,
) -> Result<impl IntoResponse, AppError> {
    let registered = AuthService::new(&state.db).register_teacher(dto).await?;

    Ok((StatusCode::CREATED, Json(registered)))
}

/// POST /api/auth/register-student - Register a student and issue a token
///
/// # Authentication
/// Requires the teacher role; students are enrolled by the academy.
///
/// # Returns
/// - `201 Created`: RegisteredStudentDto with the stored student and token
/// - `400 Bad Request`: Missing name or email
/// - `403 Forbidden`: Caller is a student
pub async fn register_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&headers, &[Permission::Teacher])
        .await?;

    let registered = AuthService::new(&state.db).register_student(dto).await?;

    Ok((StatusCode::CREATED, Json(registered)))
}
