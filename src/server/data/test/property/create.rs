use super::*;

/// Tests creating a listing with amenities.
///
/// Verifies that the listing row and its amenity join rows are stored and
/// that reading it back returns the amenities and the agent summary.
///
/// Expected: Ok with amenities and agent attached
#[tokio::test]
async fn creates_listing_with_amenities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let repo = PropertyRepository::new(db);

    let created = repo
        .create(
            agent.id,
            "family-home-1".to_string(),
            create_param("Family Home", vec![Amenity::Pool, Amenity::Garage]),
        )
        .await?;

    assert_eq!(created.slug, "family-home-1");
    assert_eq!(created.views, 0);
    assert!(created.is_active);

    let found = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(found.amenities, vec![Amenity::Garage, Amenity::Pool]);
    assert_eq!(found.agent.map(|a| a.id), Some(agent.id));
    assert_eq!(found.address.city, "Denver");
    assert_eq!(found.features.year_built, Some(1998));

    Ok(())
}

/// Tests the unique slug constraint.
///
/// Verifies that a second listing with the same slug is rejected.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let repo = PropertyRepository::new(db);

    repo.create(agent.id, "same".to_string(), create_param("One", Vec::new()))
        .await?;
    let result = repo
        .create(agent.id, "same".to_string(), create_param("Two", Vec::new()))
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests looking up a listing by slug.
///
/// Expected: Ok(Some) for a known slug and Ok(None) otherwise
#[tokio::test]
async fn finds_listing_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let property = factory::property::PropertyFactory::new(db, agent.id)
        .slug("lake-cabin-123")
        .build()
        .await?;

    let repo = PropertyRepository::new(db);

    let found = repo.find_by_slug("lake-cabin-123").await?;
    assert_eq!(found.map(|p| p.id), Some(property.id));
    assert!(repo.find_by_slug("missing").await?.is_none());

    Ok(())
}
