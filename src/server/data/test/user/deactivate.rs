use super::*;

/// Tests soft deleting a user.
///
/// Verifies that the row remains but is marked inactive and no longer counts
/// as an active user.
///
/// Expected: Ok(true) and inactive user
#[tokio::test]
async fn marks_user_inactive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.deactivate(user.id).await?);

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert!(!stored.is_active);
    assert_eq!(repo.count_active(None).await?, 0);
    assert_eq!(repo.count_all().await?, 1);

    Ok(())
}

/// Tests soft deleting a missing user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!UserRepository::new(db).deactivate(42).await?);

    Ok(())
}

/// Tests counting active users restricted to roles.
///
/// Expected: Ok(2) for agents and admins
#[tokio::test]
async fn counts_active_users_by_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::create_agent(db).await?;
    factory::create_admin(db).await?;

    let count = UserRepository::new(db)
        .count_active(Some(&[Role::Agent, Role::Admin][..]))
        .await?;

    assert_eq!(count, 2);

    Ok(())
}
