use super::*;

/// Tests removing a saved listing.
///
/// Expected: Ok, then Err(NotFound) with "Favorite not found" on a second removal
#[tokio::test]
async fn removes_then_reports_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_agent(db).await?;
    let user = factory::create_user(db).await?;
    factory::create_favorite(db, user.id, property.id).await?;
    let user = User::from_entity(user);

    let service = FavoriteService::new(db);
    service.remove(&user, property.id).await?;
    assert!(!service.check(&user, property.id).await?);

    match service.remove(&user, property.id).await {
        Err(AppError::NotFound(message)) => assert_eq!(message, "Favorite not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}
