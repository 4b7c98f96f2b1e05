use axum::{
    extract::{
        multipart::{Field, MultipartRejection},
        Multipart, Path, State,
    },
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DataDto, ErrorDto, ListDto, MessageDto},
        upload::{ImageUploadForm, ImagesUploadForm, UploadedImageDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::upload::{ImageFile, UploadService, MAX_IMAGES_PER_UPLOAD},
        state::AppState,
    },
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static UPLOAD_TAG: &str = "upload";

/// A multipart file read fully into memory.
struct UploadedFile {
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

impl UploadedFile {
    fn as_image(&self) -> ImageFile<'_> {
        ImageFile {
            file_name: self.file_name.as_deref(),
            content_type: self.content_type.as_deref(),
            bytes: &self.bytes,
        }
    }

    async fn read(field: Field<'_>) -> Result<Self, AppError> {
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?.to_vec();

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }
}

/// Reads every file sent under `name`, failing once more than `max` arrive.
///
/// Fields with other names are skipped.
async fn read_files(
    multipart: &mut Multipart,
    name: &str,
    max: usize,
) -> Result<Vec<UploadedFile>, AppError> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(name) {
            continue;
        }

        if files.len() == max {
            return Err(AppError::BadRequest(format!(
                "At most {} images can be uploaded at once",
                max
            )));
        }

        files.push(UploadedFile::read(field).await?);
    }

    Ok(files)
}

/// Upload one image as multipart field `image`.
///
/// # Access Control
/// - `Agent` - Agents and admins
///
/// # Returns
/// - `200 OK` - Public URL and id of the stored image
/// - `400 Bad Request` - No image, not an image type, or over 5 MB
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller is a regular user
#[utoipa::path(
    post,
    path = "/api/upload/image",
    tag = UPLOAD_TAG,
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Stored image", body = DataDto<UploadedImageDto>),
        (status = 400, description = "Missing or invalid image", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an agent or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    session: Session,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Agent])
        .await?;

    let mut multipart = multipart?;
    let Some(file) = read_files(&mut multipart, "image", 1).await?.pop() else {
        return Err(AppError::BadRequest("Please upload an image".to_string()));
    };

    let image = UploadService::new(&state.upload_dir, &state.app_url)
        .store_image(
            file.file_name.as_deref(),
            file.content_type.as_deref(),
            &file.bytes,
        )
        .await?;

    Ok(Json(DataDto::new(image.into_dto())))
}

/// Upload up to ten images as multipart field `images`.
///
/// Every file is checked like a single upload before any is stored, so one
/// rejected file fails the whole request. Files are stored in the order
/// received.
#[utoipa::path(
    post,
    path = "/api/upload/images",
    tag = UPLOAD_TAG,
    request_body(content = ImagesUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Stored images", body = ListDto<UploadedImageDto>),
        (status = 400, description = "Missing, invalid or too many images", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an agent or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_images(
    State(state): State<AppState>,
    session: Session,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Agent])
        .await?;

    let mut multipart = multipart?;
    let files = read_files(&mut multipart, "images", MAX_IMAGES_PER_UPLOAD).await?;
    if files.is_empty() {
        return Err(AppError::BadRequest(
            "Please upload at least one image".to_string(),
        ));
    }

    let images: Vec<ImageFile<'_>> = files.iter().map(UploadedFile::as_image).collect();
    let stored = UploadService::new(&state.upload_dir, &state.app_url)
        .store_images(&images)
        .await?;

    Ok(Json(ListDto::new(
        stored.into_iter().map(|image| image.into_dto()).collect(),
    )))
}

/// Delete a stored image. Unknown ids succeed.
#[utoipa::path(
    delete,
    path = "/api/upload/image/{public_id}",
    tag = UPLOAD_TAG,
    params(("public_id" = String, Path, description = "Id returned by an upload")),
    responses(
        (status = 200, description = "Image deleted successfully", body = MessageDto),
        (status = 400, description = "Invalid image id", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an agent or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_image(
    State(state): State<AppState>,
    session: Session,
    Path(public_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Agent])
        .await?;

    UploadService::new(&state.upload_dir, &state.app_url)
        .delete_image(&public_id)
        .await?;

    Ok(Json(MessageDto::new("Image deleted successfully")))
}
