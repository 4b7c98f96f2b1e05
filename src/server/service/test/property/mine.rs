use super::*;

/// Tests listing the caller's own listings.
///
/// Verifies that other agents' listings are excluded, deactivated listings
/// are included by default and the status filter applies.
///
/// Expected: Ok with only the caller's matching listings
#[tokio::test]
async fn lists_only_callers_listings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let other = factory::create_agent(db).await?;
    factory::create_property(db, agent.id).await?;
    factory::property::PropertyFactory::new(db, agent.id)
        .active(false)
        .build()
        .await?;
    factory::property::PropertyFactory::new(db, agent.id)
        .status(PropertyStatus::Sold)
        .build()
        .await?;
    factory::create_property(db, other.id).await?;

    let agent = User::from_entity(agent);
    let service = PropertyService::new(db);
    let page = PageRequest::new(None, None, 12);

    let all = service.mine(&agent, None, None, page).await?;
    assert_eq!(all.total, 3);
    assert!(all.items.iter().all(|p| p.agent_id == agent.id));

    let sold = service
        .mine(&agent, Some(PropertyStatus::Sold), None, page)
        .await?;
    assert_eq!(sold.total, 1);

    let inactive = service.mine(&agent, None, Some(false), page).await?;
    assert_eq!(inactive.total, 1);

    Ok(())
}
