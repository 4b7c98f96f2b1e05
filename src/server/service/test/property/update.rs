use super::*;

/// Tests updating someone else's listing as an agent.
///
/// Expected: Err(AccessDenied) with the update message
#[tokio::test]
async fn denies_other_agents() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_agent(db).await?;
    let intruder = User::from_entity(factory::create_agent(db).await?);
    let property = factory::create_property(db, owner.id).await?;

    let result = PropertyService::new(db)
        .update(
            &intruder,
            property.id,
            UpdatePropertyParam {
                price: Some(1.0),
                ..Default::default()
            },
        )
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(id, message))) => {
            assert_eq!(id, intruder.id);
            assert_eq!(message, "Not authorized to update this property");
        }
        other => panic!("expected AccessDenied, got {:?}", other),
    }

    Ok(())
}

/// Tests an admin retitling another agent's listing.
///
/// Verifies that the slug is regenerated from the new title and the owner
/// is unchanged.
///
/// Expected: Ok with the new title and slug
#[tokio::test]
async fn admin_update_regenerates_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_agent(db).await?;
    let admin = User::from_entity(factory::create_admin(db).await?);
    let property = factory::property::PropertyFactory::new(db, owner.id)
        .title("Old Barn")
        .slug("old-barn-1")
        .build()
        .await?;

    let updated = PropertyService::new(db)
        .update(
            &admin,
            property.id,
            UpdatePropertyParam {
                title: Some("Restored Barn".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, "Restored Barn");
    assert!(updated.slug.starts_with("restored-barn-"));
    assert_eq!(updated.agent_id, owner.id);

    Ok(())
}

/// Tests that resubmitting the current title keeps the slug.
///
/// Expected: Ok with the slug unchanged
#[tokio::test]
async fn keeps_slug_when_title_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_agent(db).await?;
    let property = factory::property::PropertyFactory::new(db, owner.id)
        .title("Lake Cabin")
        .slug("lake-cabin-1")
        .build()
        .await?;

    let updated = PropertyService::new(db)
        .update(
            &User::from_entity(owner),
            property.id,
            UpdatePropertyParam {
                title: Some("Lake Cabin".to_string()),
                status: Some(PropertyStatus::Pending),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.slug, "lake-cabin-1");
    assert_eq!(updated.status, PropertyStatus::Pending);

    Ok(())
}
