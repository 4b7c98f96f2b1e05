use super::*;

/// Tests that deactivated listings are hidden from the favorites page.
///
/// Verifies that `total` still counts every favorite while the items only
/// hold active listings.
///
/// Expected: Ok with one visible favorite out of two
#[tokio::test]
async fn hides_inactive_listings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let active = factory::create_property(db, agent.id).await?;
    let inactive = factory::property::PropertyFactory::new(db, agent.id)
        .active(false)
        .build()
        .await?;
    let user = factory::create_user(db).await?;
    factory::create_favorite(db, user.id, active.id).await?;
    factory::create_favorite(db, user.id, inactive.id).await?;

    let page = FavoriteService::new(db)
        .list(&User::from_entity(user), PageRequest::new(None, None, 12))
        .await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].property_id, active.id);

    Ok(())
}
