use super::*;

/// Tests the in-database view counter.
///
/// Verifies that repeated increments accumulate.
///
/// Expected: Ok with views increased by three
#[tokio::test]
async fn increments_views() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let property = factory::property::PropertyFactory::new(db, agent.id)
        .views(10)
        .build()
        .await?;

    let repo = PropertyRepository::new(db);
    for _ in 0..3 {
        repo.increment_views(property.id).await?;
    }

    let stored = repo.find_by_id(property.id).await?.unwrap();
    assert_eq!(stored.views, 13);

    Ok(())
}
