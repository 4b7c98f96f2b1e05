use super::*;

/// Tests the public agent directory.
///
/// Verifies that active agents and admins are listed by name while regular
/// users and deactivated agents are left out.
///
/// Expected: Ok with active agents and admins sorted by name
#[tokio::test]
async fn lists_active_agents_and_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .name("Zoe Agent")
        .role(Role::Agent)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .name("Adam Admin")
        .role(Role::Admin)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .name("Inactive Agent")
        .role(Role::Agent)
        .active(false)
        .build()
        .await?;
    factory::create_user(db).await?;

    let (agents, total) = UserRepository::new(db)
        .get_agents_paginated(None, PageRequest::new(None, None, 10))
        .await?;

    assert_eq!(total, 2);
    assert_eq!(
        agents.iter().map(|u| u.name.as_str()).collect::<Vec<_>>(),
        vec!["Adam Admin", "Zoe Agent"]
    );

    Ok(())
}

/// Tests searching the agent directory by name.
///
/// Expected: Ok with the single matching agent
#[tokio::test]
async fn filters_agents_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .name("Maria Lopez")
        .role(Role::Agent)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .name("Tom Baker")
        .role(Role::Agent)
        .build()
        .await?;

    let (agents, total) = UserRepository::new(db)
        .get_agents_paginated(Some("lopez"), PageRequest::new(None, None, 10))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(agents[0].name, "Maria Lopez");

    Ok(())
}
