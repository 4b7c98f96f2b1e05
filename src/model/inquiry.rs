use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ContactMethod, ContactTime, InquiryStatus, InquiryType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{property::PropertySummaryDto, user::UserSummaryDto};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InquiryResponseDto {
    pub message: String,
    pub responded_at: DateTime<Utc>,
    pub responded_by: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InquiryDto {
    pub id: i32,
    pub property_id: i32,
    pub property: Option<PropertySummaryDto>,
    pub user_id: Option<i32>,
    pub user: Option<UserSummaryDto>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub inquiry_type: InquiryType,
    pub preferred_contact_method: ContactMethod,
    pub preferred_contact_time: ContactTime,
    pub status: InquiryStatus,
    pub response: Option<InquiryResponseDto>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiryDto {
    /// Id of the listing the inquiry is about.
    pub property: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub inquiry_type: Option<InquiryType>,
    pub preferred_contact_method: Option<ContactMethod>,
    pub preferred_contact_time: Option<ContactTime>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateInquiryDto {
    pub status: Option<InquiryStatus>,
    pub notes: Option<String>,
    /// Reply sent to the inquirer. Setting it marks the inquiry as responded.
    pub response: Option<String>,
}
