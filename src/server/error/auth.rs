use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token in the `Authorization` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The presented token does not match any issued token.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token is not valid")]
    InvalidToken,

    /// The token resolved to a uid that exists in neither the student nor the
    /// teacher collection.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {0} not found in the system")]
    UserNotFound(String),

    /// The authenticated user lacks the role required by the endpoint.
    ///
    /// The reason is logged server-side; the client receives a generic
    /// message. Results in a 403 Forbidden response.
    #[error("Access denied for user {uid}: {reason}")]
    AccessDenied { uid: String, reason: String },
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - Missing or invalid token
/// - 403 Forbidden - Insufficient role for the endpoint
/// - 404 Not Found - Token user not present in the system
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication token not provided".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid or expired token".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "User not found in the system".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied { uid, reason } => {
                tracing::debug!("Access denied for user {}: {}", uid, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Access denied".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
