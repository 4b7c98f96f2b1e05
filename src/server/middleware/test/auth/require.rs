use super::*;

/// Tests an anonymous request against a protected route.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a user that no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_unknown_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(404).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}

/// Tests a deactivated account.
///
/// Verifies that soft deleted users are locked out even with a valid session.
///
/// Expected: Err(AuthError::AccountDeactivated)
#[tokio::test]
async fn rejects_deactivated_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountDeactivated(_)))
    ));

    Ok(())
}

/// Tests the agent permission for every role.
///
/// Verifies that agents and admins pass while regular users get a 403.
///
/// Expected: Ok for agent and admin, Err(AccessDenied) for user
#[tokio::test]
async fn agent_permission_allows_agents_and_admins() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let guard = AuthGuard::new(db, session);
    let auth_session = AuthSession::new(session);

    for (role, allowed) in [(Role::User, false), (Role::Agent, true), (Role::Admin, true)] {
        let user = factory::user::UserFactory::new(db).role(role).build().await?;
        auth_session.set_user_id(user.id).await?;

        let result = guard.require(&[Permission::Agent]).await;

        assert_eq!(result.is_ok(), allowed, "role {:?}", role);
    }

    Ok(())
}

/// Tests that an agent cannot pass the admin permission.
///
/// Expected: Err(AuthError::AccessDenied) naming the role
#[tokio::test]
async fn admin_permission_denies_agent() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let agent = factory::create_agent(db).await?;
    AuthSession::new(session).set_user_id(agent.id).await?;

    let result = AuthGuard::new(db, session).require(&[Permission::Admin]).await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, agent.id);
            assert_eq!(message, "User role agent is not authorized to access this route");
        }
        other => panic!("expected access denied, got {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests that an admin passes every permission.
///
/// Expected: Ok(User) with the admin's id
#[tokio::test]
async fn admin_passes_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::Agent, Permission::Admin])
        .await?;

    assert_eq!(user.id, admin.id);
    assert_eq!(user.role, Role::Admin);

    Ok(())
}
