use super::*;

/// Tests counting listings per agent.
///
/// Verifies that counts can include or exclude deactivated listings and that
/// agents without listings are absent.
///
/// Expected: Ok with per-agent counts
#[tokio::test]
async fn counts_listings_per_agent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let busy = factory::create_agent(db).await?;
    let idle = factory::create_agent(db).await?;
    factory::create_property(db, busy.id).await?;
    factory::create_property(db, busy.id).await?;
    factory::property::PropertyFactory::new(db, busy.id)
        .active(false)
        .build()
        .await?;

    let repo = PropertyRepository::new(db);

    let active = repo.counts_by_agent(&[busy.id, idle.id], true).await?;
    assert_eq!(active.get(&busy.id), Some(&2));
    assert_eq!(active.get(&idle.id), None);

    let all = repo.counts_by_agent(&[busy.id], false).await?;
    assert_eq!(all.get(&busy.id), Some(&3));

    assert_eq!(repo.ids_by_agent(busy.id).await?.len(), 3);
    assert!(repo.ids_by_agent(idle.id).await?.is_empty());

    Ok(())
}
