use super::*;
use crate::server::model::property::{AddressUpdate, FeaturesUpdate};

/// Tests a partial listing update.
///
/// Verifies that address and features merge field by field, amenities are
/// replaced and the new slug is stored.
///
/// Expected: Ok(Some) with merged fields
#[tokio::test]
async fn merges_partial_update() -> Result<(), DbErr> {
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
            "old-title-1".to_string(),
            create_param("Old Title", vec![Amenity::Pool]),
        )
        .await?;

    let updated = repo
        .update(
            created.id,
            UpdatePropertyParam {
                title: Some("New Title".to_string()),
                status: Some(PropertyStatus::Pending),
                address: AddressUpdate {
                    city: Some("Boulder".to_string()),
                    ..Default::default()
                },
                features: FeaturesUpdate {
                    bedrooms: Some(5),
                    ..Default::default()
                },
                amenities: Some(vec![Amenity::Fireplace]),
                ..Default::default()
            },
            Some("new-title-2".to_string()),
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.slug, "new-title-2");
    assert_eq!(updated.status, PropertyStatus::Pending);
    assert_eq!(updated.address.city, "Boulder");
    assert_eq!(updated.address.street, "1 Main St");
    assert_eq!(updated.features.bedrooms, 5);
    assert_eq!(updated.features.bathrooms, 2);
    assert_eq!(updated.amenities, vec![Amenity::Fireplace]);

    Ok(())
}

/// Tests that omitting amenities keeps the stored ones.
///
/// Expected: Ok(Some) with the original amenities
#[tokio::test]
async fn keeps_amenities_when_absent() -> Result<(), DbErr> {
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
            "keep-1".to_string(),
            create_param("Keep", vec![Amenity::Gym]),
        )
        .await?;

    let updated = repo
        .update(
            created.id,
            UpdatePropertyParam {
                price: Some(300_000.0),
                ..Default::default()
            },
            None,
        )
        .await?
        .unwrap();

    assert_eq!(updated.price, 300_000.0);
    assert_eq!(updated.slug, "keep-1");
    assert_eq!(updated.amenities, vec![Amenity::Gym]);

    Ok(())
}

/// Tests that renamed titles and cities are found by search afterwards.
///
/// Expected: Ok with the new terms matching and the old city not
#[tokio::test]
async fn keeps_search_columns_in_sync() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let repo = PropertyRepository::new(db);
    let created = repo
        .create(agent.id, "loft-1".to_string(), create_param("Loft", vec![]))
        .await?;

    repo.update(
        created.id,
        UpdatePropertyParam {
            title: Some("Ålesund Harbour Loft".to_string()),
            address: AddressUpdate {
                city: Some("Ålesund".to_string()),
                ..Default::default()
            },
            ..Default::default()
        },
        None,
    )
    .await?
    .unwrap();

    let city = |city: &str| PropertyFilter {
        city: Some(city.to_string()),
        ..PropertyFilter::active()
    };
    let search = PropertyFilter {
        search: Some("ÅLESUND HARBOUR".to_string()),
        ..PropertyFilter::active()
    };

    assert_eq!(repo.count(&city("ÅLESUND")).await?, 1);
    assert_eq!(repo.count(&city("Denver")).await?, 0);
    assert_eq!(repo.count(&search).await?, 1);

    Ok(())
}

/// Tests updating a missing listing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PropertyRepository::new(db)
        .update(404, UpdatePropertyParam::default(), None)
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests soft deleting a listing.
///
/// Verifies that the listing is still readable by id but inactive.
///
/// Expected: Ok(true) then inactive listing
#[tokio::test]
async fn deactivates_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_property_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_agent(db).await?;
    let repo = PropertyRepository::new(db);

    assert!(repo.deactivate(property.id).await?);
    assert!(!repo.deactivate(9999).await?);

    let stored = repo.find_by_id(property.id).await?.unwrap();
    assert!(!stored.is_active);

    Ok(())
}
