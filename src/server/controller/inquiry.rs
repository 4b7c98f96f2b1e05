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
        api::{DataDto, ErrorDto, MessageDto, PageDto},
        inquiry::{CreateInquiryDto, InquiryDto, UpdateInquiryDto},
    },
    server::{
        controller::param::{InquiryQuery, MyInquiriesQuery, DEFAULT_INQUIRY_LIMIT},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            inquiry::{CreateInquiryParam, Inquiry, UpdateInquiryParam},
            pagination::PageRequest,
        },
        service::inquiry::InquiryService,
        state::AppState,
    },
};

/// Tag for grouping inquiry endpoints in OpenAPI documentation
pub static INQUIRY_TAG: &str = "inquiry";

/// Submit an inquiry about a listing and notify its agent.
///
/// The submitter is attached when logged in. A failed notification does not
/// fail the request.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - The stored inquiry
/// - `400 Bad Request` - Invalid inquiry fields
/// - `404 Not Found` - No listing with the given id
#[utoipa::path(
    post,
    path = "/api/inquiries",
    tag = INQUIRY_TAG,
    request_body = CreateInquiryDto,
    responses(
        (status = 201, description = "Inquiry submitted successfully", body = DataDto<InquiryDto>),
        (status = 400, description = "Invalid inquiry data", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_inquiry(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateInquiryDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).optional().await?;

    let Json(payload) = payload?;
    let param = CreateInquiryParam::try_from(payload)?;

    let inquiry = InquiryService::new(&state.db, state.mailer.as_ref())
        .create(param, user.as_ref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataDto::with_message(
            inquiry.into_dto(),
            "Inquiry submitted successfully",
        )),
    ))
}

/// List every inquiry, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can list all inquiries
#[utoipa::path(
    get,
    path = "/api/inquiries",
    tag = INQUIRY_TAG,
    params(InquiryQuery),
    responses(
        (status = 200, description = "Matching inquiries", body = PageDto<InquiryDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_inquiries(
    State(state): State<AppState>,
    session: Session,
    query: Result<Query<InquiryQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Query(query) = query?;
    let (filter, page) = query.into_parts();

    let inquiries = InquiryService::new(&state.db, state.mailer.as_ref())
        .list(&filter, page)
        .await?;

    Ok(Json(PageDto::from(inquiries.map(Inquiry::into_dto))))
}

/// Inquiries on the caller's listings.
///
/// # Access Control
/// - `Agent` - Agents and admins
#[utoipa::path(
    get,
    path = "/api/inquiries/my-inquiries",
    tag = INQUIRY_TAG,
    params(MyInquiriesQuery),
    responses(
        (status = 200, description = "Inquiries on the caller's listings", body = PageDto<InquiryDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an agent or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_inquiries(
    State(state): State<AppState>,
    session: Session,
    query: Result<Query<MyInquiriesQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let agent = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Agent])
        .await?;

    let Query(query) = query?;
    let page = PageRequest::new(query.page, query.limit, DEFAULT_INQUIRY_LIMIT);

    let inquiries = InquiryService::new(&state.db, state.mailer.as_ref())
        .mine(&agent, query.status, page)
        .await?;

    Ok(Json(PageDto::from(inquiries.map(Inquiry::into_dto))))
}

/// Get an inquiry. A new inquiry is marked read.
///
/// # Access Control
/// - `Agent` - The listing's agent or an admin
///
/// # Returns
/// - `200 OK` - The inquiry
/// - `403 Forbidden` - Caller does not own the listing
/// - `404 Not Found` - No inquiry with this id
#[utoipa::path(
    get,
    path = "/api/inquiries/{id}",
    tag = INQUIRY_TAG,
    params(("id" = i32, Path, description = "Inquiry id")),
    responses(
        (status = 200, description = "The inquiry", body = DataDto<InquiryDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not authorized to view this inquiry", body = ErrorDto),
        (status = 404, description = "Inquiry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inquiry(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Agent])
        .await?;

    let Path(id) = id?;

    let inquiry = InquiryService::new(&state.db, state.mailer.as_ref())
        .get(&actor, id)
        .await?;

    Ok(Json(DataDto::new(inquiry.into_dto())))
}

/// Update an inquiry's status or notes, or respond to it.
///
/// A response is recorded with the caller and the current time, forces the
/// status to `responded` and is mailed to the inquirer.
///
/// # Access Control
/// - `Agent` - The listing's agent or an admin
#[utoipa::path(
    put,
    path = "/api/inquiries/{id}",
    tag = INQUIRY_TAG,
    params(("id" = i32, Path, description = "Inquiry id")),
    request_body = UpdateInquiryDto,
    responses(
        (status = 200, description = "The updated inquiry", body = DataDto<InquiryDto>),
        (status = 400, description = "Invalid inquiry data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not authorized to update this inquiry", body = ErrorDto),
        (status = 404, description = "Inquiry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_inquiry(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateInquiryDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Agent])
        .await?;

    let Path(id) = id?;
    let Json(payload) = payload?;
    let param = UpdateInquiryParam::try_from(payload)?;

    let inquiry = InquiryService::new(&state.db, state.mailer.as_ref())
        .update(&actor, id, param)
        .await?;

    Ok(Json(DataDto::new(inquiry.into_dto())))
}

/// Permanently delete an inquiry.
///
/// # Access Control
/// - `Admin` - Only admins can delete inquiries
#[utoipa::path(
    delete,
    path = "/api/inquiries/{id}",
    tag = INQUIRY_TAG,
    params(("id" = i32, Path, description = "Inquiry id")),
    responses(
        (status = 200, description = "Inquiry deleted successfully", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Inquiry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_inquiry(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Path(id) = id?;

    InquiryService::new(&state.db, state.mailer.as_ref())
        .delete(id)
        .await?;

    Ok(Json(MessageDto::new("Inquiry deleted successfully")))
}
