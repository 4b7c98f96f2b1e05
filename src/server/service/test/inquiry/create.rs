use super::*;

/// Tests submitting an inquiry while logged in.
///
/// Verifies that the submitter is attached and the listing's agent receives
/// a notification naming the listing and the inquiry details.
///
/// Expected: Ok with a new inquiry and one email to the agent
#[tokio::test]
async fn stores_inquiry_and_notifies_agent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = factory::create_agent(db).await?;
    let property = factory::property::PropertyFactory::new(db, agent.id)
        .title("Garden Cottage")
        .build()
        .await?;
    let user = User::from_entity(factory::create_user(db).await?);

    let mailer = RecordingMailer::default();
    let inquiry = InquiryService::new(db, &mailer)
        .create(create_param(property.id), Some(&user))
        .await?;

    assert_eq!(inquiry.status, InquiryStatus::New);
    assert_eq!(inquiry.user_id, Some(user.id));
    assert_eq!(inquiry.property_id, property.id);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, agent.email);
    assert_eq!(sent[0].subject, "New Inquiry for Garden Cottage - RealEstate Pro");
    assert!(sent[0].body.contains("Sam Buyer"));
    assert!(sent[0].body.contains("Inquiry Type: offer"));
    assert!(sent[0].body.contains("Preferred Contact Method: phone"));

    Ok(())
}

/// Tests that a failing mailer does not fail the submission.
///
/// Expected: Ok with the inquiry stored
#[tokio::test]
async fn swallows_mailer_failure() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_agent(db).await?;

    let inquiry = InquiryService::new(db, &FailingMailer)
        .create(create_param(property.id), None)
        .await?;

    assert_eq!(inquiry.user_id, None);
    assert_eq!(inquiry.property_id, property.id);

    Ok(())
}

/// Tests submitting an inquiry for a listing that does not exist.
///
/// Expected: Err(NotFound) and no email sent
#[tokio::test]
async fn fails_for_missing_listing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mailer = RecordingMailer::default();
    let result = InquiryService::new(db, &mailer)
        .create(create_param(999), None)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(mailer.sent().is_empty());

    Ok(())
}
