use super::*;

/// Tests saving a listing.
///
/// Expected: Ok with the favorite and its listing, reported by `check`
#[tokio::test]
async fn saves_listing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_agent(db).await?;
    let user = User::from_entity(factory::create_user(db).await?);

    let service = FavoriteService::new(db);
    assert!(!service.check(&user, property.id).await?);

    let favorite = service.add(&user, property.id).await?;

    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.property.map(|p| p.id), Some(property.id));
    assert!(service.check(&user, property.id).await?);

    Ok(())
}

/// Tests saving the same listing twice.
///
/// Expected: Err(BadRequest) with "Property already in favorites"
#[tokio::test]
async fn rejects_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_agent(db).await?;
    let user = User::from_entity(factory::create_user(db).await?);

    let service = FavoriteService::new(db);
    service.add(&user, property.id).await?;
    let result = service.add(&user, property.id).await;

    match result {
        Err(AppError::BadRequest(message)) => {
            assert_eq!(message, "Property already in favorites")
        }
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}

/// Tests saving a deactivated or missing listing.
///
/// Expected: Err(NotFound) for both
#[tokio::test]
async fn rejects_inactive_and_missing_listings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let inactive = factory::property::PropertyFactory::new(db, agent.id)
        .active(false)
        .build()
        .await?;
    let user = User::from_entity(factory::create_user(db).await?);

    let service = FavoriteService::new(db);
    for property_id in [inactive.id, inactive.id + 100] {
        let result = service.add(&user, property_id).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    Ok(())
}
