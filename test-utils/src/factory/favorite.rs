//! Favorite factory for saving listings to a user's list.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Saves `property_id` to the favorites of `user_id`.
///
/// # Returns
/// - `Ok(entity::favorite::Model)` - Created favorite
/// - `Err(DbErr)` - Database error, including a duplicate pair
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    property_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        property_id: ActiveValue::Set(property_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
