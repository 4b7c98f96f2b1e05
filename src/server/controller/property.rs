use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DataDto, ErrorDto, ListDto, MessageDto, PageDto},
        property::{CreatePropertyDto, PropertyDto, UpdatePropertyDto},
    },
    server::{
        controller::param::{
            LimitParams, MyPropertiesQuery, PageParams, PropertyQuery, DEFAULT_FEATURED_LIMIT,
            DEFAULT_PROPERTY_LIMIT, DEFAULT_SIMILAR_LIMIT,
        },
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            pagination::PageRequest,
            property::{CreatePropertyParam, Property, UpdatePropertyParam},
        },
        service::property::PropertyService,
        state::AppState,
    },
};

/// Tag for grouping property endpoints in OpenAPI documentation
pub static PROPERTY_TAG: &str = "property";

/// Search active listings.
///
/// Every filter is optional and all given filters must match. Each listing
/// embeds its agent's public summary.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - One page of listings
/// - `400 Bad Request` - Malformed query or unknown amenity
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/properties",
    tag = PROPERTY_TAG,
    params(PropertyQuery),
    responses(
        (status = 200, description = "Matching listings", body = PageDto<PropertyDto>),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_properties(
    State(state): State<AppState>,
    query: Result<Query<PropertyQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let (filter, sort, page) = query.into_parts()?;

    let properties = PropertyService::new(&state.db)
        .list(&filter, sort, page)
        .await?;

    Ok(Json(PageDto::from(properties.map(Property::into_dto))))
}

/// Get a listing by id, counting the view.
///
/// # Returns
/// - `200 OK` - The listing with its agent
/// - `404 Not Found` - No listing with this id
#[utoipa::path(
    get,
    path = "/api/properties/{id}",
    tag = PROPERTY_TAG,
    params(("id" = i32, Path, description = "Property id")),
    responses(
        (status = 200, description = "The listing", body = DataDto<PropertyDto>),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_property(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let property = PropertyService::new(&state.db).get(id).await?;

    Ok(Json(DataDto::new(property.into_dto())))
}

/// Get a listing by slug, counting the view.
#[utoipa::path(
    get,
    path = "/api/properties/slug/{slug}",
    tag = PROPERTY_TAG,
    params(("slug" = String, Path, description = "Property slug")),
    responses(
        (status = 200, description = "The listing", body = DataDto<PropertyDto>),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_property_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let property = PropertyService::new(&state.db).get_by_slug(&slug).await?;

    Ok(Json(DataDto::new(property.into_dto())))
}

/// Create a listing owned by the caller.
///
/// # Access Control
/// - `Agent` - Agents and admins
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Listing fields
///
/// # Returns
/// - `201 Created` - The created listing
/// - `400 Bad Request` - Invalid listing fields
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller is a regular user
#[utoipa::path(
    post,
    path = "/api/properties",
    tag = PROPERTY_TAG,
    request_body = CreatePropertyDto,
    responses(
        (status = 201, description = "Successfully created listing", body = DataDto<PropertyDto>),
        (status = 400, description = "Invalid listing data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an agent or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_property(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreatePropertyDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let agent = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Agent])
        .await?;

    let Json(payload) = payload?;
    let param = CreatePropertyParam::try_from(payload)?;

    let property = PropertyService::new(&state.db).create(&agent, param).await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(property.into_dto()))))
}

/// Partially update a listing.
///
/// Address and features are merged field by field, amenities and images are
/// replaced when present. A new title regenerates the slug.
///
/// # Access Control
/// - `Agent` - The listing's agent or an admin
///
/// # Returns
/// - `200 OK` - The updated listing
/// - `400 Bad Request` - Invalid fields
/// - `403 Forbidden` - Caller does not own the listing
/// - `404 Not Found` - No listing with this id
#[utoipa::path(
    put,
    path = "/api/properties/{id}",
    tag = PROPERTY_TAG,
    params(("id" = i32, Path, description = "Property id")),
    request_body = UpdatePropertyDto,
    responses(
        (status = 200, description = "Successfully updated listing", body = DataDto<PropertyDto>),
        (status = 400, description = "Invalid listing data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not authorized to update this property", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_property(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdatePropertyDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Agent])
        .await?;

    let Path(id) = id?;
    let Json(payload) = payload?;
    let param = UpdatePropertyParam::try_from(payload)?;

    let property = PropertyService::new(&state.db)
        .update(&actor, id, param)
        .await?;

    Ok(Json(DataDto::new(property.into_dto())))
}

/// Deactivate a listing. The record is kept.
///
/// # Access Control
/// - `Agent` - The listing's agent or an admin
#[utoipa::path(
    delete,
    path = "/api/properties/{id}",
    tag = PROPERTY_TAG,
    params(("id" = i32, Path, description = "Property id")),
    responses(
        (status = 200, description = "Property deleted successfully", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not authorized to delete this property", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_property(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Agent])
        .await?;

    let Path(id) = id?;

    PropertyService::new(&state.db).delete(&actor, id).await?;

    Ok(Json(MessageDto::new("Property deleted successfully")))
}

/// Featured, available listings, newest first.
#[utoipa::path(
    get,
    path = "/api/properties/featured",
    tag = PROPERTY_TAG,
    params(LimitParams),
    responses(
        (status = 200, description = "Featured listings", body = ListDto<PropertyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn featured_properties(
    State(state): State<AppState>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;

    let properties = PropertyService::new(&state.db)
        .featured(params.limit(DEFAULT_FEATURED_LIMIT))
        .await?;

    Ok(Json(ListDto::new(
        properties.into_iter().map(Property::into_dto).collect(),
    )))
}

/// Active listings of one agent.
#[utoipa::path(
    get,
    path = "/api/properties/agent/{agent_id}",
    tag = PROPERTY_TAG,
    params(
        ("agent_id" = i32, Path, description = "Agent user id"),
        PageParams
    ),
    responses(
        (status = 200, description = "The agent's listings", body = PageDto<PropertyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn agent_properties(
    State(state): State<AppState>,
    agent_id: Result<Path<i32>, PathRejection>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(agent_id) = agent_id?;
    let Query(params) = params?;

    let properties = PropertyService::new(&state.db)
        .by_agent(agent_id, params.request(DEFAULT_PROPERTY_LIMIT))
        .await?;

    Ok(Json(PageDto::from(properties.map(Property::into_dto))))
}

/// The caller's own listings, deactivated ones included.
///
/// # Access Control
/// - `Agent` - Agents and admins
#[utoipa::path(
    get,
    path = "/api/properties/dashboard/my-properties",
    tag = PROPERTY_TAG,
    params(MyPropertiesQuery),
    responses(
        (status = 200, description = "The caller's listings", body = PageDto<PropertyDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an agent or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_properties(
    State(state): State<AppState>,
    session: Session,
    query: Result<Query<MyPropertiesQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Agent])
        .await?;

    let Query(query) = query?;
    let page = PageRequest::new(query.page, query.limit, DEFAULT_PROPERTY_LIMIT);

    let properties = PropertyService::new(&state.db)
        .mine(&actor, query.status, query.is_active, page)
        .await?;

    Ok(Json(PageDto::from(properties.map(Property::into_dto))))
}

/// Listings sharing the type, the city or a price within 30% of a listing.
#[utoipa::path(
    get,
    path = "/api/properties/{id}/similar",
    tag = PROPERTY_TAG,
    params(
        ("id" = i32, Path, description = "Property id"),
        LimitParams
    ),
    responses(
        (status = 200, description = "Similar listings", body = ListDto<PropertyDto>),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn similar_properties(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Query(params) = params?;

    let properties = PropertyService::new(&state.db)
        .similar(id, params.limit(DEFAULT_SIMILAR_LIMIT))
        .await?;

    Ok(Json(ListDto::new(
        properties.into_iter().map(Property::into_dto).collect(),
    )))
}
