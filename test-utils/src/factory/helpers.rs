//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to build unique emails and slugs across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an agent together with one default listing they own.
///
/// # Returns
/// - `Ok((agent, property))` - The created agent and listing
/// - `Err(DbErr)` - Database error during creation
pub async fn create_property_with_agent(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::property::Model), DbErr> {
    let agent = crate::factory::user::create_agent(db).await?;
    let property = crate::factory::property::create_property(db, agent.id).await?;

    Ok((agent, property))
}
