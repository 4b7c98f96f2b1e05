use crate::model::upload::UploadedImageDto;

/// An image written to the upload directory.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredImage {
    pub url: String,
    /// File name inside the upload directory, used to delete the image later.
    pub public_id: String,
}

impl StoredImage {
    pub fn into_dto(self) -> UploadedImageDto {
        UploadedImageDto {
            url: self.url,
            public_id: self.public_id,
        }
    }
}
