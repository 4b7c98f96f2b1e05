use super::*;

/// Tests responding to an inquiry.
///
/// Verifies that the response is recorded with the responder, the status is
/// forced to `responded` and the inquirer is mailed the response.
///
/// Expected: Ok with the response stored and one email to the inquirer
#[tokio::test]
async fn records_response_and_mails_inquirer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (agent, property) = factory::helpers::create_property_with_agent(db).await?;
    let created = factory::create_inquiry(db, property.id).await?;
    let agent = User::from_entity(agent);

    let mailer = RecordingMailer::default();
    let inquiry = InquiryService::new(db, &mailer)
        .update(
            &agent,
            created.id,
            UpdateInquiryParam {
                status: Some(InquiryStatus::Closed),
                notes: Some("Called back".to_string()),
                response: Some("Viewings are on Saturdays.".to_string()),
            },
        )
        .await?;

    assert_eq!(inquiry.status, InquiryStatus::Responded);
    assert_eq!(inquiry.notes.as_deref(), Some("Called back"));
    let response = inquiry.response.clone().unwrap();
    assert_eq!(response.message, "Viewings are on Saturdays.");
    assert_eq!(response.responded_by, Some(agent.id));

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, created.email);
    assert_eq!(
        sent[0].subject,
        "Response to Your Property Inquiry - RealEstate Pro"
    );
    assert!(sent[0].body.contains("Viewings are on Saturdays."));

    Ok(())
}

/// Tests a status-only update.
///
/// Expected: Ok with the new status and no email sent
#[tokio::test]
async fn updates_status_without_mail() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_agent(db).await?;
    let created = factory::create_inquiry(db, property.id).await?;
    let admin = User::from_entity(factory::create_admin(db).await?);

    let mailer = RecordingMailer::default();
    let inquiry = InquiryService::new(db, &mailer)
        .update(
            &admin,
            created.id,
            UpdateInquiryParam {
                status: Some(InquiryStatus::Closed),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(inquiry.status, InquiryStatus::Closed);
    assert!(inquiry.response.is_none());
    assert!(mailer.sent().is_empty());

    Ok(())
}
