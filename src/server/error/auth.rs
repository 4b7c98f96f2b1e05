use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    #[error("No user is logged in for this session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The session user was soft deleted.
    #[error("User {0} is deactivated")]
    AccountDeactivated(i32),

    /// Unknown email or wrong password at login.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Wrong current password when changing the password.
    #[error("User {0} supplied an incorrect current password")]
    IncorrectPassword(i32),

    /// The user is authenticated but not allowed to perform the action.
    ///
    /// The message is returned to the client.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Hashing or parsing a stored password hash failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - missing, unknown or deactivated session users → 401
/// - bad credentials → 401 "Invalid credentials"
/// - `AccessDenied` → 403 with its message
/// - hashing failures → 500
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                "Not authorized to access this route".to_string(),
            ),
            Self::AccountDeactivated(_) => (
                StatusCode::UNAUTHORIZED,
                "Account has been deactivated".to_string(),
            ),
            Self::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            Self::IncorrectPassword(_) => (
                StatusCode::UNAUTHORIZED,
                "Current password is incorrect".to_string(),
            ),
            Self::AccessDenied(_, message) => (StatusCode::FORBIDDEN, message),
            Self::PasswordHash(err) => {
                tracing::error!("Password hashing failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
