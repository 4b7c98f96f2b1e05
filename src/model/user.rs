use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserAddressDto {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default, PartialEq)]
pub struct SocialLinksDto {
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

/// Public profile of a user. The password hash is never part of it.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub role: Role,
    pub company: Option<String>,
    pub bio: Option<String>,
    pub address: Option<UserAddressDto>,
    pub social_links: Option<SocialLinksDto>,
    pub is_verified: bool,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_count: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Agent contact card embedded in listings.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AgentSummaryDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub company: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UserSummaryDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Profile update payload. `role`, `isActive` and `isVerified` are only applied
/// when the caller is an admin.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub company: Option<String>,
    pub bio: Option<String>,
    pub address: Option<UserAddressDto>,
    pub social_links: Option<SocialLinksDto>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    pub is_verified: Option<bool>,
}
