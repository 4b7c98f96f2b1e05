use super::*;

/// Tests the featured listing selection.
///
/// Verifies that only featured, active and available listings are returned,
/// newest first and capped at the limit.
///
/// Expected: Ok with the two newest qualifying listings
#[tokio::test]
async fn returns_newest_featured_available() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let now = chrono::Utc::now();
    let mut featured = Vec::new();
    for days in [3, 2, 1] {
        let property = factory::property::PropertyFactory::new(db, agent.id)
            .featured(true)
            .created_at(now - chrono::Duration::days(days))
            .build()
            .await?;
        featured.push(property.id);
    }
    factory::property::PropertyFactory::new(db, agent.id)
        .featured(true)
        .status(PropertyStatus::Sold)
        .build()
        .await?;
    factory::property::PropertyFactory::new(db, agent.id)
        .featured(true)
        .active(false)
        .build()
        .await?;
    factory::create_property(db, agent.id).await?;

    let properties = PropertyService::new(db).featured(2).await?;

    let ids: Vec<i32> = properties.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![featured[2], featured[1]]);

    Ok(())
}
