use super::*;

/// Tests finding similar listings.
///
/// Verifies that listings sharing the type, the city or a price within 30%
/// match, while the base listing, unrelated, inactive and unavailable
/// listings do not.
///
/// Expected: Ok with the three related listings
#[tokio::test]
async fn matches_type_city_or_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let base = factory::property::PropertyFactory::new(db, agent.id)
        .property_type(PropertyType::Condo)
        .city("Miami")
        .price(100_000.0)
        .build()
        .await?;

    let same_type = factory::property::PropertyFactory::new(db, agent.id)
        .property_type(PropertyType::Condo)
        .city("Tampa")
        .price(900_000.0)
        .build()
        .await?;
    let same_city = factory::property::PropertyFactory::new(db, agent.id)
        .property_type(PropertyType::Villa)
        .city("Miami")
        .price(900_000.0)
        .build()
        .await?;
    let close_price = factory::property::PropertyFactory::new(db, agent.id)
        .property_type(PropertyType::Villa)
        .city("Tampa")
        .price(125_000.0)
        .build()
        .await?;
    factory::property::PropertyFactory::new(db, agent.id)
        .property_type(PropertyType::Villa)
        .city("Tampa")
        .price(900_000.0)
        .build()
        .await?;
    factory::property::PropertyFactory::new(db, agent.id)
        .property_type(PropertyType::Condo)
        .active(false)
        .build()
        .await?;
    factory::property::PropertyFactory::new(db, agent.id)
        .property_type(PropertyType::Condo)
        .status(PropertyStatus::Sold)
        .build()
        .await?;

    let repo = PropertyRepository::new(db);
    let base = repo.find_by_id(base.id).await?.unwrap();

    let mut ids: Vec<i32> = repo
        .similar(&base, 10)
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();
    ids.sort_unstable();

    let mut expected = vec![same_type.id, same_city.id, close_price.id];
    expected.sort_unstable();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests the similar listing limit.
///
/// Expected: Ok with at most `limit` listings
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let base = factory::create_property(db, agent.id).await?;
    for _ in 0..5 {
        factory::create_property(db, agent.id).await?;
    }

    let repo = PropertyRepository::new(db);
    let base = repo.find_by_id(base.id).await?.unwrap();

    assert_eq!(repo.similar(&base, 4).await?.len(), 4);

    Ok(())
}
