use super::*;

/// Tests that each read of a listing counts as a view.
///
/// Expected: Ok with views incremented on every call, by id and by slug
#[tokio::test]
async fn counts_each_view() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let created = factory::property::PropertyFactory::new(db, agent.id)
        .slug("corner-house")
        .views(4)
        .build()
        .await?;

    let service = PropertyService::new(db);

    let first = service.get(created.id).await?;
    assert_eq!(first.views, 5);
    assert_eq!(first.agent.map(|a| a.id), Some(agent.id));

    let second = service.get_by_slug("corner-house").await?;
    assert_eq!(second.views, 6);

    Ok(())
}

/// Tests reading a listing that does not exist.
///
/// Expected: Err(NotFound) with "Property not found"
#[tokio::test]
async fn fails_for_missing_listing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PropertyService::new(db).get(404).await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, "Property not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}
