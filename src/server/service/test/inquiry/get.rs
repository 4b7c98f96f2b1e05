use super::*;

/// Tests that the listing's agent reading a new inquiry marks it read.
///
/// Expected: Ok with status `read` returned and stored
#[tokio::test]
async fn marks_new_inquiry_read() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (agent, property) = factory::helpers::create_property_with_agent(db).await?;
    let created = factory::create_inquiry(db, property.id).await?;
    let agent = User::from_entity(agent);

    let mailer = RecordingMailer::default();
    let service = InquiryService::new(db, &mailer);

    let inquiry = service.get(&agent, created.id).await?;
    assert_eq!(inquiry.status, InquiryStatus::Read);
    assert_eq!(inquiry.property.map(|p| p.id), Some(property.id));

    let again = service.get(&agent, created.id).await?;
    assert_eq!(again.status, InquiryStatus::Read);

    Ok(())
}

/// Tests that a responded inquiry keeps its status when viewed.
///
/// Expected: Ok with status `responded`
#[tokio::test]
async fn leaves_other_statuses_alone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_agent(db).await?;
    let created = factory::inquiry::InquiryFactory::new(db, property.id)
        .status(InquiryStatus::Responded)
        .build()
        .await?;
    let admin = User::from_entity(factory::create_admin(db).await?);

    let mailer = RecordingMailer::default();
    let inquiry = InquiryService::new(db, &mailer)
        .get(&admin, created.id)
        .await?;

    assert_eq!(inquiry.status, InquiryStatus::Responded);

    Ok(())
}

/// Tests an agent reading an inquiry on someone else's listing.
///
/// Expected: Err(AccessDenied) with the view message
#[tokio::test]
async fn denies_other_agents() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_agent(db).await?;
    let created = factory::create_inquiry(db, property.id).await?;
    let intruder = User::from_entity(factory::create_agent(db).await?);

    let mailer = RecordingMailer::default();
    let result = InquiryService::new(db, &mailer)
        .get(&intruder, created.id)
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(_, message))) => {
            assert_eq!(message, "Not authorized to view this inquiry")
        }
        other => panic!("expected AccessDenied, got {:?}", other),
    }

    Ok(())
}
