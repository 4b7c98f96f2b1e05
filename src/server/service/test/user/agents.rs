use super::*;

/// Tests the public agent directory.
///
/// Verifies that only active agents and admins are listed, each with the
/// number of their active listings.
///
/// Expected: Ok with two agents and their active listing counts
#[tokio::test]
async fn lists_agents_with_active_counts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_property_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::user::UserFactory::new(db)
        .name("Alice Agent")
        .role(entity::sea_orm_active_enums::Role::Agent)
        .build()
        .await?;
    let admin = factory::user::UserFactory::new(db)
        .name("Bob Admin")
        .role(entity::sea_orm_active_enums::Role::Admin)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .role(entity::sea_orm_active_enums::Role::Agent)
        .active(false)
        .build()
        .await?;
    factory::create_user(db).await?;

    factory::create_property(db, agent.id).await?;
    factory::property::PropertyFactory::new(db, agent.id)
        .active(false)
        .build()
        .await?;

    let page = UserService::new(db)
        .agents(None, PageRequest::new(None, None, 10))
        .await?;

    let counts: Vec<(i32, u64)> = page
        .items
        .iter()
        .map(|a| (a.user.id, a.property_count))
        .collect();
    assert_eq!(page.total, 2);
    assert_eq!(counts, vec![(agent.id, 1), (admin.id, 0)]);

    Ok(())
}
