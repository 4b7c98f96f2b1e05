use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DataDto, ErrorDto, MessageDto, PageDto},
        favorite::{FavoriteCheckDto, FavoriteDto},
    },
    server::{
        controller::param::{PageParams, DEFAULT_FAVORITE_LIMIT},
        error::AppError,
        middleware::auth::AuthGuard,
        model::favorite::Favorite,
        service::favorite::FavoriteService,
        state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// The caller's saved listings, newest first.
///
/// Deactivated listings are left out of `data` while `total` counts every
/// saved listing.
///
/// # Access Control
/// - Any logged in user
#[utoipa::path(
    get,
    path = "/api/favorites",
    tag = FAVORITE_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Saved listings", body = PageDto<FavoriteDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    session: Session,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Query(params) = params?;

    let favorites = FavoriteService::new(&state.db)
        .list(&user, params.request(DEFAULT_FAVORITE_LIMIT))
        .await?;

    Ok(Json(PageDto::from(favorites.map(Favorite::into_dto))))
}

/// Save a listing.
///
/// # Returns
/// - `201 Created` - Listing saved
/// - `400 Bad Request` - Listing already saved
/// - `404 Not Found` - Listing missing or deactivated
#[utoipa::path(
    post,
    path = "/api/favorites/{property_id}",
    tag = FAVORITE_TAG,
    params(("property_id" = i32, Path, description = "Property id")),
    responses(
        (status = 201, description = "Added to favorites", body = DataDto<FavoriteDto>),
        (status = 400, description = "Property already in favorites", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    session: Session,
    property_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Path(property_id) = property_id?;

    let favorite = FavoriteService::new(&state.db)
        .add(&user, property_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataDto::with_message(favorite.into_dto(), "Added to favorites")),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/favorites/{property_id}",
    tag = FAVORITE_TAG,
    params(("property_id" = i32, Path, description = "Property id")),
    responses(
        (status = 200, description = "Removed from favorites", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    session: Session,
    property_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Path(property_id) = property_id?;

    FavoriteService::new(&state.db)
        .remove(&user, property_id)
        .await?;

    Ok(Json(MessageDto::new("Removed from favorites")))
}

/// Whether the caller has saved a listing.
#[utoipa::path(
    get,
    path = "/api/favorites/check/{property_id}",
    tag = FAVORITE_TAG,
    params(("property_id" = i32, Path, description = "Property id")),
    responses(
        (status = 200, description = "Saved state", body = FavoriteCheckDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_favorite(
    State(state): State<AppState>,
    session: Session,
    property_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Path(property_id) = property_id?;

    let is_favorited = FavoriteService::new(&state.db)
        .check(&user, property_id)
        .await?;

    Ok(Json(FavoriteCheckDto {
        success: true,
        is_favorited,
    }))
}
