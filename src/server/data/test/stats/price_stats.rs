use super::*;

/// Tests price statistics over available listings.
///
/// Expected: Ok with avg 200000, min 100000, max 300000
#[tokio::test]
async fn computes_average_min_and_max() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    for price in [100_000.0, 200_000.0, 300_000.0] {
        factory::property::PropertyFactory::new(db, agent.id)
            .price(price)
            .build()
            .await?;
    }
    factory::property::PropertyFactory::new(db, agent.id)
        .price(5_000_000.0)
        .status(PropertyStatus::Sold)
        .build()
        .await?;

    let filter = PropertyFilter {
        status: Some(PropertyStatus::Available),
        ..PropertyFilter::active()
    };
    let stats = StatsRepository::new(db).price_stats(&filter).await?;

    assert_eq!(stats.avg_price, 200_000.0);
    assert_eq!(stats.min_price, 100_000.0);
    assert_eq!(stats.max_price, 300_000.0);

    Ok(())
}

/// Tests price statistics without matching listings.
///
/// Expected: Ok with all zeros
#[tokio::test]
async fn zeros_without_listings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stats = StatsRepository::new(db)
        .price_stats(&PropertyFilter::active())
        .await?;

    assert_eq!(stats, Default::default());

    Ok(())
}
