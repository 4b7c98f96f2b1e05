use super::*;

/// Tests fetching recent creation timestamps.
///
/// Verifies that records older than the cutoff are excluded for both
/// listings and inquiries.
///
/// Expected: Ok with one recent listing and one recent inquiry
#[tokio::test]
async fn excludes_records_before_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let agent = factory::create_agent(db).await?;
    let recent = factory::property::PropertyFactory::new(db, agent.id)
        .created_at(now - Duration::days(10))
        .build()
        .await?;
    factory::property::PropertyFactory::new(db, agent.id)
        .created_at(now - Duration::days(400))
        .build()
        .await?;
    factory::inquiry::InquiryFactory::new(db, recent.id)
        .created_at(now - Duration::days(5))
        .build()
        .await?;
    factory::inquiry::InquiryFactory::new(db, recent.id)
        .created_at(now - Duration::days(300))
        .build()
        .await?;

    let repo = StatsRepository::new(db);
    let since = now - Duration::days(180);

    let properties = repo.property_created_since(since, None).await?;
    assert_eq!(properties.len(), 1);

    let inquiries = repo
        .inquiry_created_since(since, &InquiryFilter::default())
        .await?;
    assert_eq!(inquiries.len(), 1);

    Ok(())
}
