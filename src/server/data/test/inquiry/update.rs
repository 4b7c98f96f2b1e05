use super::*;

/// Tests responding to an inquiry.
///
/// Verifies that a response records the responder and forces the status to
/// `responded` even when another status was requested.
///
/// Expected: Ok(Some) with response recorded
#[tokio::test]
async fn response_forces_responded_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (agent, property) = factory::helpers::create_property_with_agent(db).await?;
    let inquiry = factory::create_inquiry(db, property.id).await?;

    let updated = InquiryRepository::new(db)
        .update(
            inquiry.id,
            UpdateInquiryParam {
                status: Some(InquiryStatus::Closed),
                notes: Some("Called back".to_string()),
                response: Some("Yes, it is available.".to_string()),
            },
            agent.id,
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, InquiryStatus::Responded);
    assert_eq!(updated.notes.as_deref(), Some("Called back"));
    let response = updated.response.unwrap();
    assert_eq!(response.message, "Yes, it is available.");
    assert_eq!(response.responded_by, Some(agent.id));

    Ok(())
}

/// Tests a status-only update.
///
/// Expected: Ok(Some) with the new status and no response
#[tokio::test]
async fn updates_status_without_response() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (agent, property) = factory::helpers::create_property_with_agent(db).await?;
    let inquiry = factory::create_inquiry(db, property.id).await?;

    let updated = InquiryRepository::new(db)
        .update(
            inquiry.id,
            UpdateInquiryParam {
                status: Some(InquiryStatus::Closed),
                ..Default::default()
            },
            agent.id,
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, InquiryStatus::Closed);
    assert!(updated.response.is_none());

    Ok(())
}

/// Tests marking a new inquiry as read.
///
/// Verifies that only `new` inquiries change status.
///
/// Expected: Ok(true) for a new inquiry, Ok(false) for a closed one
#[tokio::test]
async fn marks_only_new_inquiries_read() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, property) = factory::helpers::create_property_with_agent(db).await?;
    let fresh = factory::create_inquiry(db, property.id).await?;
    let closed = factory::inquiry::InquiryFactory::new(db, property.id)
        .status(InquiryStatus::Closed)
        .build()
        .await?;

    let repo = InquiryRepository::new(db);

    assert!(repo.mark_read(fresh.id).await?);
    assert!(!repo.mark_read(closed.id).await?);

    let fresh = repo.find_by_id(fresh.id).await?.unwrap();
    let closed = repo.find_by_id(closed.id).await?.unwrap();
    assert_eq!(fresh.status, InquiryStatus::Read);
    assert_eq!(closed.status, InquiryStatus::Closed);

    Ok(())
}
