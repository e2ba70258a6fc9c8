use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::attendance::{ClassRangeQuery, HistoryQuery, MarkAttendanceDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        service::attendance::AttendanceService,
        state::AppState,
    },
};

/// POST /api/attendance/mark - Mark attendance for a batch of students
///
/// Every listed uid gets one presence; duplicates count twice. A class session
/// is recorded under the deterministic `class_YYYYMMDD_HHMMSS` id. Unknown
/// uids are reported per entry without failing the batch.
///
/// # Authentication
/// Requires the teacher role.
///
/// # Returns
/// - `200 OK`: MarkAttendanceResultDto with updated students and any errors
/// - `400 Bad Request`: Empty uid list
/// - `403 Forbidden`: Caller is a student
pub async fn mark_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<MarkAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db)
        .require(&headers, &[Permission::Teacher])
        .await?;

    let result = AttendanceService::new(&state.db)
        .mark(user.uid(), dto)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// GET /api/attendance/history/{uid} - A student's presence history
///
/// Chronological, paginated with `limit` (default 50) and `offset`.
///
/// # Authentication
/// Teachers may read anyone's history; students only their own.
///
/// # Returns
/// - `200 OK`: AttendanceHistoryDto with one page and a has_more flag
/// - `403 Forbidden`: Student reading another student's history
/// - `404 Not Found`: No student with that uid
pub async fn get_history(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    Query(query): Query<HistoryQuery>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require(&headers, &[]).await?;

    if !user.can_access_student(&uid) {
        return Err(AuthError::AccessDenied {
            uid: user.uid().to_string(),
            reason: format!("Student attempted to read attendance history of {uid}"),
        }
        .into());
    }

    let history = AttendanceService::new(&state.db)
        .history(&uid, query.limit, query.offset)
        .await?;

    Ok((StatusCode::OK, Json(history)))
}

/// GET /api/attendance/class/{class_id} - One class session's detail
///
/// # Authentication
/// Requires the teacher role.
///
/// # Returns
/// - `200 OK`: ClassSessionDto with resolved attendee summaries
/// - `403 Forbidden`: Caller is a student
/// - `404 Not Found`: No session with that class id
pub async fn get_class(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&headers, &[Permission::Teacher])
        .await?;

    let class = AttendanceService::new(&state.db).get_class(&class_id).await?;

    Ok((StatusCode::OK, Json(class)))
}

/// GET /api/attendance/classes - Class sessions in a date range
///
/// Both `start_date` and `end_date` query parameters are required, RFC 3339
/// timestamps, inclusive on both ends.
///
/// # Authentication
/// Requires the teacher role.
///
/// # Returns
/// - `200 OK`: ClassListDto with summaries oldest first
/// - `400 Bad Request`: Missing bounds or start after end
/// - `403 Forbidden`: Caller is a student
pub async fn get_classes(
    State(state): State<AppState>,
    Query(query): Query<ClassRangeQuery>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&headers, &[Permission::Teacher])
        .await?;

    let (Some(start_date), Some(end_date)) = (query.start_date, query.end_date) else {
        return Err(AppError::BadRequest(
            "Query parameters 'start_date' and 'end_date' are required".to_string(),
        ));
    };

    let classes = AttendanceService::new(&state.db)
        .get_classes(start_date, end_date)
        .await?;

    Ok((StatusCode::OK, Json(classes)))
}
