//! Inquiry domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ContactMethod, ContactTime, InquiryStatus, InquiryType};

use crate::{
    model::inquiry::{CreateInquiryDto, InquiryDto, InquiryResponseDto, UpdateInquiryDto},
    server::{
        error::validation::ValidationError,
        model::{property::PropertySummary, user::UserSummary},
        util::validate::Validator,
    },
};

/// Agent reply recorded on an inquiry.
#[derive(Debug, Clone, PartialEq)]
pub struct InquiryResponse {
    pub message: String,
    pub responded_at: DateTime<Utc>,
    pub responded_by: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Inquiry {
    pub id: i32,
    pub property_id: i32,
    pub property: Option<PropertySummary>,
    pub user_id: Option<i32>,
    pub user: Option<UserSummary>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub inquiry_type: InquiryType,
    pub preferred_contact_method: ContactMethod,
    pub preferred_contact_time: ContactTime,
    pub status: InquiryStatus,
    pub response: Option<InquiryResponse>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Inquiry {
    /// Converts an entity model at the repository boundary, attaching the
    /// listing and submitter summaries when they were loaded.
    pub fn from_entity(
        entity: entity::inquiry::Model,
        property: Option<PropertySummary>,
        user: Option<UserSummary>,
    ) -> Self {
        let response = match (entity.response_message, entity.responded_at) {
            (Some(message), Some(responded_at)) => Some(InquiryResponse {
                message,
                responded_at,
                responded_by: entity.responded_by,
            }),
            _ => None,
        };

        Self {
            id: entity.id,
            property_id: entity.property_id,
            property,
            user_id: entity.user_id,
            user,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            message: entity.message,
            inquiry_type: entity.inquiry_type,
            preferred_contact_method: entity.preferred_contact_method,
            preferred_contact_time: entity.preferred_contact_time,
            status: entity.status,
            response,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> InquiryDto {
        InquiryDto {
            id: self.id,
            property_id: self.property_id,
            property: self.property.map(PropertySummary::into_dto),
            user_id: self.user_id,
            user: self.user.map(UserSummary::into_dto),
            name: self.name,
            email: self.email,
            phone: self.phone,
            message: self.message,
            inquiry_type: self.inquiry_type,
            preferred_contact_method: self.preferred_contact_method,
            preferred_contact_time: self.preferred_contact_time,
            status: self.status,
            response: self.response.map(|r| InquiryResponseDto {
                message: r.message,
                responded_at: r.responded_at,
                responded_by: r.responded_by,
            }),
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateInquiryParam {
    pub property_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub inquiry_type: InquiryType,
    pub preferred_contact_method: ContactMethod,
    pub preferred_contact_time: ContactTime,
}

impl TryFrom<CreateInquiryDto> for CreateInquiryParam {
    type Error = ValidationError;

    fn try_from(dto: CreateInquiryDto) -> Result<Self, Self::Error> {
        let mut v = Validator::new();
        v.required("name", &dto.name, Some(50));
        v.email("email", dto.email.trim());
        v.required("phone", &dto.phone, None);
        v.required("message", &dto.message, Some(1000));
        v.finish()?;

        Ok(Self {
            property_id: dto.property,
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            phone: dto.phone.trim().to_string(),
            message: dto.message,
            inquiry_type: dto.inquiry_type.unwrap_or(InquiryType::General),
            preferred_contact_method: dto
                .preferred_contact_method
                .unwrap_or(ContactMethod::Email),
            preferred_contact_time: dto.preferred_contact_time.unwrap_or(ContactTime::Anytime),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateInquiryParam {
    pub status: Option<InquiryStatus>,
    pub notes: Option<String>,
    pub response: Option<String>,
}

impl TryFrom<UpdateInquiryDto> for UpdateInquiryParam {
    type Error = ValidationError;

    fn try_from(dto: UpdateInquiryDto) -> Result<Self, Self::Error> {
        let mut v = Validator::new();
        if let Some(response) = &dto.response {
            v.required("response", response, Some(1000));
        }
        v.finish()?;

        Ok(Self {
            status: dto.status,
            notes: dto.notes,
            response: dto.response,
        })
    }
}

/// Inquiry listing filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InquiryFilter {
    pub status: Option<InquiryStatus>,
    pub property_id: Option<i32>,
    /// Restricts results to inquiries on these listings (an agent's own).
    pub property_ids: Option<Vec<i32>>,
}
