use super::*;

/// Tests storing an image.
///
/// Verifies that the file is written under a generated name and the URL
/// points at the public uploads path.
///
/// Expected: Ok with the stored file matching the input bytes
#[tokio::test]
async fn writes_file_under_generated_name() -> Result<(), AppError> {
    let dir = tempfile::tempdir()?;
    let service = UploadService::new(dir.path(), "http://localhost:5000/");

    let image = service
        .store_image(Some("Kitchen.PNG"), Some("image/png"), b"png-bytes")
        .await?;

    assert!(image.public_id.ends_with(".png"));
    assert_ne!(image.public_id, "Kitchen.PNG");
    assert_eq!(
        image.url,
        format!("http://localhost:5000/uploads/{}", image.public_id)
    );
    let stored = tokio::fs::read(dir.path().join(&image.public_id)).await?;
    assert_eq!(stored, b"png-bytes");

    Ok(())
}

/// Tests storing a file that is not an image.
///
/// Expected: Err(BadRequest) with "Only image files are allowed!"
#[tokio::test]
async fn rejects_non_image() -> Result<(), AppError> {
    let dir = tempfile::tempdir()?;
    let service = UploadService::new(dir.path(), "http://localhost:5000");

    let result = service
        .store_image(Some("contract.pdf"), Some("application/pdf"), b"%PDF")
        .await;

    match result {
        Err(AppError::BadRequest(message)) => {
            assert_eq!(message, "Only image files are allowed!")
        }
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}

/// Tests storing an image over the size limit.
///
/// Expected: Err(BadRequest) and nothing written
#[tokio::test]
async fn rejects_oversized_image() -> Result<(), AppError> {
    let dir = tempfile::tempdir()?;
    let service = UploadService::new(dir.path(), "http://localhost:5000");

    let bytes = vec![0u8; MAX_IMAGE_SIZE + 1];
    let result = service
        .store_image(Some("huge.jpg"), Some("image/jpeg"), &bytes)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(std::fs::read_dir(dir.path())?.count(), 0);

    Ok(())
}
