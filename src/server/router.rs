use axum::{
    routing::{get, post, put},
    Router,
};

use crate::server::{
    controller::{attendance, auth, student},
    state::AppState,
};

/// Builds the API router.
///
/// The static `/api/students/profile`, `/api/students/update-profile`, and
/// `/api/students/attendance` routes coexist with `/api/students/{uid}`; axum
/// gives literal segments precedence. Marking and history are each reachable
/// under both the students and attendance prefixes, matching the paths the
/// frontend calls.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/verify-token", post(auth::verify_token))
        .route("/api/auth/register-teacher", post(auth::register_teacher))
        .route("/api/auth/register-student", post(auth::register_student))
        .route(
            "/api/students",
            get(student::get_students).post(student::create_student),
        )
        .route(
            "/api/students/close-to-graduation",
            get(student::get_close_to_graduation),
        )
        .route("/api/students/profile", get(student::get_profile))
        .route("/api/students/update-profile", put(student::update_profile))
        .route(
            "/api/students/{uid}",
            get(student::get_student).put(student::update_student),
        )
        .route(
            "/api/students/{uid}/extra-activity",
            post(student::add_extra_activity),
        )
        .route(
            "/api/students/{uid}/remove-extra-activity",
            post(student::remove_extra_activity),
        )
        .route(
            "/api/students/{uid}/attendance-history",
            get(attendance::get_history),
        )
        .route(
            "/api/students/attendance",
            post(attendance::mark_attendance),
        )
        .route("/api/attendance/mark", post(attendance::mark_attendance))
        .route("/api/attendance/history/{uid}", get(attendance::get_history))
        .route("/api/attendance/class/{class_id}", get(attendance::get_class))
        .route("/api/attendance/classes", get(attendance::get_classes))
}
