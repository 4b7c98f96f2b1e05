use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DataDto, ErrorDto, MessageDto},
        auth::{LoginDto, RegisterDto, UpdatePasswordDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::{LoginParam, RegisterParam, UpdatePasswordParam},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account and log it in.
///
/// Accounts may choose the `user` or `agent` role. The session id is rotated
/// before the new user id is stored.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Invalid fields or the email is already registered
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Successfully registered", body = DataDto<UserDto>),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<RegisterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = RegisterParam::try_from(payload)?;

    let user = AuthService::new(&state.db).register(param).await?;

    AuthSession::new(&session).login(user.id).await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(user.into_dto()))))
}

/// Log in with email and password.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - The logged in user
/// - `400 Bad Request` - Missing email or password
/// - `401 Unauthorized` - Invalid credentials or deactivated account
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = DataDto<UserDto>),
        (status = 400, description = "Invalid login data", body = ErrorDto),
        (status = 401, description = "Invalid credentials or deactivated account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = LoginParam::try_from(payload)?;

    let user = AuthService::new(&state.db).login(param).await?;

    AuthSession::new(&session).login(user.id).await?;

    Ok(Json(DataDto::new(user.into_dto())))
}

/// Get the currently logged in user.
///
/// # Returns
/// - `200 OK` - The session user
/// - `401 Unauthorized` - Not logged in or account deactivated
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = DataDto<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok(Json(DataDto::new(user.into_dto())))
}

/// Change the logged in user's password.
///
/// # Access Control
/// - Any logged in user
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - New password too short
/// - `401 Unauthorized` - Not logged in or wrong current password
#[utoipa::path(
    put,
    path = "/api/auth/password",
    tag = AUTH_TAG,
    request_body = UpdatePasswordDto,
    responses(
        (status = 200, description = "Password updated", body = MessageDto),
        (status = 400, description = "Invalid password data", body = ErrorDto),
        (status = 401, description = "Not logged in or wrong current password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_password(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<UpdatePasswordDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Json(payload) = payload?;
    let param = UpdatePasswordParam::try_from(payload)?;

    AuthService::new(&state.db)
        .update_password(&user, param)
        .await?;

    Ok(Json(MessageDto::new("Password updated successfully")))
}

/// Log out by clearing the session.
///
/// Succeeds for anonymous sessions too.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(Json(MessageDto::new("Logged out successfully")))
}
