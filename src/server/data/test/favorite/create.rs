use super::*;

/// Tests saving, checking and removing a favorite.
///
/// Expected: Ok with exists reflecting each step
#[tokio::test]
async fn creates_checks_and_deletes_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_agent(db).await?;
    let user = factory::create_user(db).await?;
    let repo = FavoriteRepository::new(db);

    assert!(!repo.exists(user.id, property.id).await?);

    let favorite = repo.create(user.id, property.id).await?;
    assert_eq!(favorite.property_id, property.id);
    assert!(repo.exists(user.id, property.id).await?);

    assert!(repo.delete(user.id, property.id).await?);
    assert!(!repo.exists(user.id, property.id).await?);
    assert!(!repo.delete(user.id, property.id).await?);

    Ok(())
}

/// Tests the unique (user, property) pair.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_agent(db).await?;
    let user = factory::create_user(db).await?;
    let repo = FavoriteRepository::new(db);

    repo.create(user.id, property.id).await?;
    let result = repo.create(user.id, property.id).await;

    assert!(result.is_err());

    Ok(())
}
