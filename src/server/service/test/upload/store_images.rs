use super::*;

fn png(name: &'static str, bytes: &'static [u8]) -> ImageFile<'static> {
    ImageFile {
        file_name: Some(name),
        content_type: Some("image/png"),
        bytes,
    }
}

async fn stored_files(dir: &std::path::Path) -> std::io::Result<usize> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut count = 0;
    while entries.next_entry().await?.is_some() {
        count += 1;
    }
    Ok(count)
}

/// Tests storing several images in one call.
///
/// Expected: Ok with one stored file per input, in input order
#[tokio::test]
async fn stores_every_image_in_order() -> Result<(), AppError> {
    let dir = tempfile::tempdir()?;
    let service = UploadService::new(dir.path(), "http://localhost:5000");

    let images = service
        .store_images(&[png("front.png", b"front"), png("back.png", b"back")])
        .await?;

    assert_eq!(images.len(), 2);
    let first = tokio::fs::read(dir.path().join(&images[0].public_id)).await?;
    let second = tokio::fs::read(dir.path().join(&images[1].public_id)).await?;
    assert_eq!(first, b"front");
    assert_eq!(second, b"back");

    Ok(())
}

/// Tests a batch whose second file is not an image.
///
/// Verifies that the valid first file is not written either.
///
/// Expected: Err(BadRequest) and an empty upload directory
#[tokio::test]
async fn rejects_batch_without_writing_when_a_file_is_invalid() -> Result<(), AppError> {
    let dir = tempfile::tempdir()?;
    let service = UploadService::new(dir.path(), "http://localhost:5000");

    let contract = ImageFile {
        file_name: Some("contract.pdf"),
        content_type: Some("application/pdf"),
        bytes: b"%PDF",
    };
    let result = service
        .store_images(&[png("front.png", b"front"), contract])
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(stored_files(dir.path()).await?, 0);

    Ok(())
}

/// Tests a batch whose last file is over the size limit.
///
/// Expected: Err(BadRequest) with "File too large" and nothing written
#[tokio::test]
async fn rejects_batch_with_oversized_image() -> Result<(), AppError> {
    let dir = tempfile::tempdir()?;
    let service = UploadService::new(dir.path(), "http://localhost:5000");

    let large = vec![0u8; MAX_IMAGE_SIZE + 1];
    let files = [
        png("front.png", b"front"),
        png("back.png", b"back"),
        ImageFile {
            file_name: Some("aerial.png"),
            content_type: Some("image/png"),
            bytes: &large,
        },
    ];

    match service.store_images(&files).await {
        Err(AppError::BadRequest(message)) => assert_eq!(message, "File too large"),
        other => panic!("expected BadRequest, got {:?}", other),
    }
    assert_eq!(stored_files(dir.path()).await?, 0);

    Ok(())
}
