use super::*;

/// Tests a user editing their own profile.
///
/// Expected: Ok with the new name
#[tokio::test]
async fn updates_own_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);

    let updated = UserService::new(db)
        .update(
            &user,
            user.id,
            UpdateUserParam {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Renamed");

    Ok(())
}

/// Tests a user editing someone else's profile.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let actor = User::from_entity(factory::create_user(db).await?);
    let target = factory::create_user(db).await?;

    let result = UserService::new(db)
        .update(&actor, target.id, UpdateUserParam::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == actor.id
    ));

    Ok(())
}

/// Tests an admin deactivating a user through a profile update and then
/// deleting a missing user.
///
/// Expected: Ok with the user inactive, then Err(NotFound)
#[tokio::test]
async fn admin_manages_any_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(factory::create_admin(db).await?);
    let target = factory::create_user(db).await?;

    let service = UserService::new(db);
    let updated = service
        .update(
            &admin,
            target.id,
            UpdateUserParam {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await?;
    assert!(!updated.is_active);

    assert!(matches!(
        service.deactivate(target.id + 100).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
