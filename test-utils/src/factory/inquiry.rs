//! Inquiry factory for creating test contact requests.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ContactMethod, ContactTime, InquiryStatus, InquiryType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test inquiries against an existing listing.
pub struct InquiryFactory<'a> {
    db: &'a DatabaseConnection,
    property_id: i32,
    user_id: Option<i32>,
    name: String,
    email: String,
    status: InquiryStatus,
    created_at: DateTime<Utc>,
}

impl<'a> InquiryFactory<'a> {
    /// Creates a new InquiryFactory for `property_id` with an anonymous, `new` inquiry.
    pub fn new(db: &'a DatabaseConnection, property_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            property_id,
            user_id: None,
            name: format!("Buyer {}", id),
            email: format!("buyer{}@example.com", id),
            status: InquiryStatus::New,
            created_at: Utc::now(),
        }
    }

    /// Attaches the inquiry to a registered user.
    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn status(mut self, status: InquiryStatus) -> Self {
        self.status = status;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::inquiry::Model, DbErr> {
        entity::inquiry::ActiveModel {
            property_id: ActiveValue::Set(self.property_id),
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set("555-0100".to_string()),
            message: ActiveValue::Set("Is this listing still available?".to_string()),
            inquiry_type: ActiveValue::Set(InquiryType::General),
            preferred_contact_method: ActiveValue::Set(ContactMethod::Email),
            preferred_contact_time: ActiveValue::Set(ContactTime::Anytime),
            status: ActiveValue::Set(self.status),
            response_message: ActiveValue::Set(None),
            responded_at: ActiveValue::Set(None),
            responded_by: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an anonymous inquiry with default values for `property_id`.
pub async fn create_inquiry(
    db: &DatabaseConnection,
    property_id: i32,
) -> Result<entity::inquiry::Model, DbErr> {
    InquiryFactory::new(db, property_id).build().await
}
