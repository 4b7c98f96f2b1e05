use super::*;

/// Tests listing a user's favorites.
///
/// Verifies that only the caller's favorites are returned and each carries
/// its hydrated listing, including inactive ones which the service filters.
///
/// Expected: Ok with two favorites and listings attached
#[tokio::test]
async fn returns_users_favorites_with_listings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let active = factory::create_property(db, agent.id).await?;
    let inactive = factory::property::PropertyFactory::new(db, agent.id)
        .active(false)
        .build()
        .await?;
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    factory::create_favorite(db, user.id, active.id).await?;
    factory::create_favorite(db, user.id, inactive.id).await?;
    factory::create_favorite(db, other.id, active.id).await?;

    let (favorites, total) = FavoriteRepository::new(db)
        .get_paginated(user.id, PageRequest::new(None, None, 12))
        .await?;

    assert_eq!(total, 2);
    assert_eq!(favorites.len(), 2);
    assert!(favorites.iter().all(|f| f.user_id == user.id));
    assert!(favorites.iter().all(|f| f.property.is_some()));
    let agent_ids: Vec<_> = favorites
        .iter()
        .filter_map(|f| f.property.as_ref().and_then(|p| p.agent.as_ref()))
        .map(|a| a.id)
        .collect();
    assert_eq!(agent_ids, vec![agent.id, agent.id]);

    Ok(())
}
