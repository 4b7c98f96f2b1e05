use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DataDto, ErrorDto, MessageDto, PageDto},
        user::{UpdateUserDto, UserDto},
    },
    server::{
        controller::param::{AgentQuery, UserQuery, DEFAULT_USER_LIMIT},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            pagination::PageRequest,
            user::{UpdateUserParam, User, UserWithPropertyCount},
        },
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List users, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - One page of users
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(UserQuery),
    responses(
        (status = 200, description = "Matching users", body = PageDto<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    session: Session,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Query(query) = query?;
    let (filter, page) = query.into_parts();

    let users = UserService::new(&state.db).list(&filter, page).await?;

    Ok(Json(PageDto::from(users.map(User::into_dto))))
}

/// List active agents with their number of active listings.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/users/agents",
    tag = USER_TAG,
    params(AgentQuery),
    responses(
        (status = 200, description = "Active agents", body = PageDto<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_agents(
    State(state): State<AppState>,
    query: Result<Query<AgentQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let page = PageRequest::new(query.page, query.limit, DEFAULT_USER_LIMIT);

    let agents = UserService::new(&state.db)
        .agents(query.search.as_deref(), page)
        .await?;

    Ok(Json(PageDto::from(agents.map(UserWithPropertyCount::into_dto))))
}

/// Get a user profile with their listing count.
///
/// # Access Control
/// - Any logged in user
///
/// # Returns
/// - `200 OK` - The user
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No user with this id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = DataDto<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Path(id) = id?;

    let user = UserService::new(&state.db).get(id).await?;

    Ok(Json(DataDto::new(user.into_dto())))
}

/// Update a user profile.
///
/// Role, active and verified flags are only applied when the caller is an
/// admin and are silently dropped otherwise.
///
/// # Access Control
/// - The user themself or an admin
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Invalid profile fields
/// - `403 Forbidden` - Caller is neither the user nor an admin
/// - `404 Not Found` - No user with this id
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "The updated user", body = DataDto<UserDto>),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not authorized to update this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Path(id) = id?;
    let Json(payload) = payload?;
    let param = UpdateUserParam::from_dto(payload, actor.is_admin())?;

    let user = UserService::new(&state.db).update(&actor, id, param).await?;

    Ok(Json(DataDto::new(user.into_dto())))
}

/// Deactivate a user. The record is kept.
///
/// # Access Control
/// - `Admin` - Only admins can deactivate users
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User deactivated successfully", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Path(id) = id?;

    UserService::new(&state.db).deactivate(id).await?;

    Ok(Json(MessageDto::new("User deactivated successfully")))
}
