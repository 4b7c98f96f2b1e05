use super::*;

/// Tests deleting a stored image, then deleting it again.
///
/// Expected: Ok both times with the file gone
#[tokio::test]
async fn removes_file_and_ignores_missing() -> Result<(), AppError> {
    let dir = tempfile::tempdir()?;
    let service = UploadService::new(dir.path(), "http://localhost:5000");

    let image = service
        .store_image(Some("porch.jpg"), Some("image/jpeg"), b"jpeg-bytes")
        .await?;

    service.delete_image(&image.public_id).await?;
    assert!(!dir.path().join(&image.public_id).exists());

    service.delete_image(&image.public_id).await?;

    Ok(())
}

/// Tests ids that would escape the upload directory.
///
/// Expected: Err(BadRequest) for every id
#[tokio::test]
async fn rejects_path_traversal() -> Result<(), AppError> {
    let dir = tempfile::tempdir()?;
    let service = UploadService::new(dir.path(), "http://localhost:5000");

    for public_id in ["../secret.png", "..", "nested/photo.png", "..\\win.png", ""] {
        let result = service.delete_image(public_id).await;
        assert!(
            matches!(result, Err(AppError::BadRequest(_))),
            "{} should be rejected",
            public_id
        );
    }

    Ok(())
}
