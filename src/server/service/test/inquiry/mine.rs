use super::*;

/// Tests listing inquiries on the caller's listings.
///
/// Expected: Ok with only inquiries on the agent's own listings
#[tokio::test]
async fn lists_inquiries_on_own_listings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let first = factory::create_property(db, agent.id).await?;
    let second = factory::create_property(db, agent.id).await?;
    let (_, foreign) = factory::helpers::create_property_with_agent(db).await?;

    factory::create_inquiry(db, first.id).await?;
    factory::create_inquiry(db, second.id).await?;
    factory::create_inquiry(db, foreign.id).await?;

    let agent = User::from_entity(agent);
    let mailer = RecordingMailer::default();
    let page = InquiryService::new(db, &mailer)
        .mine(&agent, None, PageRequest::new(None, None, 10))
        .await?;

    assert_eq!(page.total, 2);
    assert!(page
        .items
        .iter()
        .all(|i| i.property_id == first.id || i.property_id == second.id));

    Ok(())
}

/// Tests an agent with no listings.
///
/// Expected: Ok with an empty page
#[tokio::test]
async fn empty_for_agent_without_listings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_agent(db).await?;
    factory::create_inquiry(db, property.id).await?;
    let agent = User::from_entity(factory::create_agent(db).await?);

    let mailer = RecordingMailer::default();
    let page = InquiryService::new(db, &mailer)
        .mine(&agent, None, PageRequest::new(None, None, 10))
        .await?;

    assert_eq!(page.total, 0);
    assert!(page.items.is_empty());

    Ok(())
}
