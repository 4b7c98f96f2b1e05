use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UploadedImageDto {
    pub url: String,
    pub public_id: String,
}

/// Multipart form of a single image upload.
#[derive(ToSchema)]
pub struct ImageUploadForm {
    /// jpeg, jpg, png, gif or webp file of at most 5 MB
    #[schema(format = Binary)]
    pub image: String,
}

/// Multipart form of a multi-image upload. Repeat `images` up to 10 times.
#[derive(ToSchema)]
pub struct ImagesUploadForm {
    pub images: Vec<String>,
}
