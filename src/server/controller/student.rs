use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::student::{CreateStudentDto, UpdateProfileDto, UpdateStudentDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::auth::AuthUser,
        service::student::StudentService,
        state::AppState,
    },
};

/// GET /api/students - List all students
///
/// # Authentication
/// Requires the teacher role.
///
/// # Returns
/// - `200 OK`: StudentListDto with every student's progression snapshot
/// - `403 Forbidden`: Caller is a student
pub async fn get_students(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&headers, &[Permission::Teacher])
        .await?;

    let students = StudentService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(students)))
}

/// POST /api/students - Create a student
///
/// # Authentication
/// Requires the teacher role.
///
/// # Returns
/// - `201 Created`: StudentDto for the new student
/// - `400 Bad Request`: Missing name or email
/// - `403 Forbidden`: Caller is a student
pub async fn create_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&headers, &[Permission::Teacher])
        .await?;

    let student = StudentService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /api/students/close-to-graduation - Students near their next degree
///
/// Lists students with between one and ten presences left before their next
/// degree, so the instructor can plan graduations.
///
/// # Authentication
/// Requires the teacher role.
///
/// # Returns
/// - `200 OK`: StudentListDto with the matching students
/// - `403 Forbidden`: Caller is a student
pub async fn get_close_to_graduation(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&headers, &[Permission::Teacher])
        .await?;

    let students = StudentService::new(&state.db).close_to_graduation().await?;

    Ok((StatusCode::OK, Json(students)))
}

/// GET /api/students/profile - The authenticated student's own record
///
/// # Authentication
/// Requires a student token; teachers have no profile here.
///
/// # Returns
/// - `200 OK`: StudentDto for the caller
/// - `403 Forbidden`: Caller is a teacher
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require(&headers, &[]).await?;

    let AuthUser::Student(student) = user else {
        return Err(AuthError::AccessDenied {
            uid: user.uid().to_string(),
            reason: "Profile endpoint is only available to students".to_string(),
        }
        .into());
    };

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// PUT /api/students/update-profile - Self-service profile update
///
/// Only personal fields (name, address, education, photo) can change;
/// progression state is ignored.
///
/// # Authentication
/// Requires a student token.
///
/// # Returns
/// - `200 OK`: Updated StudentDto
/// - `403 Forbidden`: Caller is a teacher
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require(&headers, &[]).await?;

    let AuthUser::Student(student) = user else {
        return Err(AuthError::AccessDenied {
            uid: user.uid().to_string(),
            reason: "Profile endpoint is only available to students".to_string(),
        }
        .into());
    };

    let updated = StudentService::new(&state.db)
        .update_profile(&student.uid, dto)
        .await?;

    Ok((StatusCode::OK, Json(updated)))
}

/// GET /api/students/{uid} - One student's record
///
/// # Authentication
/// Teachers may read anyone; students only themselves.
///
/// # Returns
/// - `200 OK`: StudentDto
/// - `403 Forbidden`: Student reading another student's record
/// - `404 Not Found`: No student with that uid
pub async fn get_student(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require(&headers, &[]).await?;

    if !user.can_access_student(&uid) {
        return Err(AuthError::AccessDenied {
            uid: user.uid().to_string(),
            reason: format!("Student attempted to read record of {uid}"),
        }
        .into());
    }

    let student = StudentService::new(&state.db).get(&uid).await?;

    Ok((StatusCode::OK, Json(student)))
}

/// PUT /api/students/{uid} - Teacher-initiated update of a student
///
/// # Authentication
/// Requires the teacher role.
///
/// # Returns
/// - `200 OK`: Updated StudentDto
/// - `403 Forbidden`: Caller is a student
/// - `404 Not Found`: No student with that uid
pub async fn update_student(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    headers: HeaderMap,
    Json(dto): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&headers, &[Permission::Teacher])
        .await?;

    let student = StudentService::new(&state.db).update(&uid, dto).await?;

    Ok((StatusCode::OK, Json(student)))
}

/// POST /api/students/{uid}/extra-activity - Grant an extra-activity credit
///
/// # Authentication
/// Requires the teacher role.
///
/// # Returns
/// - `200 OK`: Updated StudentDto
/// - `400 Bad Request`: Student is a black belt
/// - `404 Not Found`: No student with that uid
pub async fn add_extra_activity(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&headers, &[Permission::Teacher])
        .await?;

    let student = StudentService::new(&state.db).add_extra_activity(&uid).await?;

    Ok((StatusCode::OK, Json(student)))
}

/// POST /api/students/{uid}/remove-extra-activity - Revoke an extra-activity credit
///
/// # Authentication
/// Requires the teacher role.
///
/// # Returns
/// - `200 OK`: Updated StudentDto
/// - `400 Bad Request`: Student has no credits to remove
/// - `404 Not Found`: No student with that uid
pub async fn remove_extra_activity(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&headers, &[Permission::Teacher])
        .await?;

    let student = StudentService::new(&state.db)
        .remove_extra_activity(&uid)
        .await?;

    Ok((StatusCode::OK, Json(student)))
}
