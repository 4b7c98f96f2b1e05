//! Local-disk image storage.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use chrono::Utc;
use rand::Rng;

use crate::server::{error::AppError, model::upload::StoredImage};

/// Largest accepted image, in bytes.
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

/// Most images accepted by one multi-image upload.
pub const MAX_IMAGES_PER_UPLOAD: usize = 10;

const ALLOWED_TYPES: [&str; 5] = ["jpeg", "jpg", "png", "gif", "webp"];

/// A file received from a client, not yet checked.
pub struct ImageFile<'b> {
    pub file_name: Option<&'b str>,
    pub content_type: Option<&'b str>,
    pub bytes: &'b [u8],
}

pub struct UploadService<'a> {
    upload_dir: &'a Path,
    app_url: &'a str,
}

impl<'a> UploadService<'a> {
    /// # Arguments
    /// - `upload_dir` - Directory images are written to and served from
    /// - `app_url` - Public base URL used to build image links
    pub fn new(upload_dir: &'a Path, app_url: &'a str) -> Self {
        Self {
            upload_dir,
            app_url,
        }
    }

    /// Validates and writes one image under a generated unique name.
    ///
    /// # Arguments
    /// - `file_name` - Client supplied file name, only its extension is kept
    /// - `content_type` - Client supplied MIME type
    /// - `bytes` - File contents
    ///
    /// # Returns
    /// - `Ok(StoredImage)` - Public URL and id of the stored file
    /// - `Err(AppError::BadRequest)` - Not an allowed image type or too large
    /// - `Err(AppError::IoErr)` - Writing the file failed
    pub async fn store_image(
        &self,
        file_name: Option<&str>,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<StoredImage, AppError> {
        let extension = check_image(file_name, content_type, bytes)?;

        self.write(&extension, bytes).await
    }

    /// Stores several images, all or nothing.
    ///
    /// Every file is checked before the first write. If a write fails, the
    /// images already written by this call are removed again.
    ///
    /// # Returns
    /// - `Ok(Vec<StoredImage>)` - Stored images in input order
    /// - `Err(AppError::BadRequest)` - Some file is not an allowed image or too large
    /// - `Err(AppError::IoErr)` - Writing a file failed
    pub async fn store_images(&self, files: &[ImageFile<'_>]) -> Result<Vec<StoredImage>, AppError> {
        let extensions = files
            .iter()
            .map(|file| check_image(file.file_name, file.content_type, file.bytes))
            .collect::<Result<Vec<_>, _>>()?;

        let mut stored = Vec::with_capacity(files.len());
        for (file, extension) in files.iter().zip(&extensions) {
            match self.write(extension, file.bytes).await {
                Ok(image) => stored.push(image),
                Err(err) => {
                    for image in &stored {
                        if let Err(cleanup) = self.delete_image(&image.public_id).await {
                            tracing::warn!(
                                "Failed to remove partial upload {}: {}",
                                image.public_id,
                                cleanup
                            );
                        }
                    }
                    return Err(err);
                }
            }
        }

        Ok(stored)
    }

    /// Writes already checked bytes under a generated unique name.
    async fn write(&self, extension: &str, bytes: &[u8]) -> Result<StoredImage, AppError> {
        let public_id = format!(
            "{}-{}.{}",
            Utc::now().timestamp_millis(),
            rand::rng().random_range(0..1_000_000_000u32),
            extension
        );

        tokio::fs::create_dir_all(self.upload_dir).await?;
        tokio::fs::write(self.upload_dir.join(&public_id), bytes).await?;

        tracing::debug!("Stored upload {} ({} bytes)", public_id, bytes.len());

        Ok(StoredImage {
            url: format!("{}/uploads/{}", self.app_url.trim_end_matches('/'), public_id),
            public_id,
        })
    }

    /// Removes a stored image. Unknown ids succeed without doing anything.
    pub async fn delete_image(&self, public_id: &str) -> Result<(), AppError> {
        let path = self.resolve(public_id)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Maps an image id to its path, rejecting anything that is not a plain
    /// file name inside the upload directory.
    fn resolve(&self, public_id: &str) -> Result<PathBuf, AppError> {
        let is_plain_name = !public_id.is_empty()
            && public_id != "."
            && public_id != ".."
            && !public_id.contains(['/', '\\'])
            && !public_id.contains("..");

        if !is_plain_name {
            return Err(AppError::BadRequest("Invalid image id".to_string()));
        }

        Ok(self.upload_dir.join(public_id))
    }
}

/// Checks type and size, returning the extension to store the file under.
fn check_image(
    file_name: Option<&str>,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<String, AppError> {
    let extension = image_extension(file_name, content_type)
        .ok_or_else(|| AppError::BadRequest("Only image files are allowed!".to_string()))?;

    if bytes.len() > MAX_IMAGE_SIZE {
        return Err(AppError::BadRequest("File too large".to_string()));
    }

    Ok(extension)
}

/// Lowercased extension of an acceptable image, or `None` when either the
/// extension or the content type is not an image type we accept.
fn image_extension(file_name: Option<&str>, content_type: Option<&str>) -> Option<String> {
    let extension = Path::new(file_name?)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();

    let content_type = content_type?.to_ascii_lowercase();

    let extension_ok = ALLOWED_TYPES.contains(&extension.as_str());
    let content_type_ok = ALLOWED_TYPES.iter().any(|t| content_type.contains(t));

    (extension_ok && content_type_ok).then_some(extension)
}
