use super::*;

/// Tests the site-wide overview.
///
/// Verifies the headline counts, price figures over active available
/// listings and the city ranking.
///
/// Expected: Ok with figures matching the seeded data
#[tokio::test]
async fn summarizes_site() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    factory::create_admin(db).await?;
    factory::create_user(db).await?;

    let cheap = factory::property::PropertyFactory::new(db, agent.id)
        .city("Austin")
        .price(100_000.0)
        .build()
        .await?;
    factory::property::PropertyFactory::new(db, agent.id)
        .city("Austin")
        .price(300_000.0)
        .build()
        .await?;
    factory::property::PropertyFactory::new(db, agent.id)
        .city("Boston")
        .status(PropertyStatus::Sold)
        .price(900_000.0)
        .build()
        .await?;
    factory::property::PropertyFactory::new(db, agent.id)
        .city("Chicago")
        .active(false)
        .build()
        .await?;

    factory::create_inquiry(db, cheap.id).await?;
    factory::inquiry::InquiryFactory::new(db, cheap.id)
        .status(InquiryStatus::Closed)
        .build()
        .await?;

    let stats = StatsService::new(db).overview().await?;

    assert_eq!(stats.total_properties, 3);
    assert_eq!(stats.total_users, 3);
    assert_eq!(stats.total_agents, 2);
    assert_eq!(stats.total_inquiries, 2);
    assert_eq!(stats.new_inquiries, 1);
    assert_eq!(stats.price_stats.avg_price, 200_000.0);
    assert_eq!(stats.price_stats.min_price, 100_000.0);
    assert_eq!(stats.price_stats.max_price, 300_000.0);

    let cities: Vec<(&str, u64)> = stats
        .top_cities
        .iter()
        .map(|g| (g.key.as_str(), g.count))
        .collect();
    assert_eq!(cities, vec![("Austin", 2), ("Boston", 1)]);

    assert_eq!(stats.recent_properties.len(), 3);
    assert_eq!(stats.recent_inquiries.len(), 2);
    assert_eq!(stats.monthly_properties.iter().map(|m| m.count).sum::<u64>(), 4);
    assert_eq!(stats.monthly_inquiries.iter().map(|m| m.count).sum::<u64>(), 2);

    Ok(())
}

/// Tests the overview of an empty site.
///
/// Expected: Ok with zero counts and zero price figures
#[tokio::test]
async fn zeros_when_empty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stats = StatsService::new(db).overview().await?;

    assert_eq!(stats.total_properties, 0);
    assert_eq!(stats.price_stats.avg_price, 0.0);
    assert!(stats.top_cities.is_empty());
    assert!(stats.monthly_properties.is_empty());

    Ok(())
}
