//! User domain models and parameters.

use chrono::{DateTime, Utc};
use entity::{
    sea_orm_active_enums::Role,
    user::{SocialLinks, UserAddress},
};

use crate::{
    model::{
        auth::{LoginDto, RegisterDto, UpdatePasswordDto},
        user::{
            AgentSummaryDto, SocialLinksDto, UpdateUserDto, UserAddressDto, UserDto,
            UserSummaryDto,
        },
    },
    server::{error::validation::ValidationError, util::validate::Validator},
};

/// Registered account. Agents and admins may publish listings.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string. Never leaves the server.
    pub password_hash: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub role: Role,
    pub company: Option<String>,
    pub bio: Option<String>,
    pub address: Option<UserAddress>,
    pub social_links: Option<SocialLinks>,
    pub is_verified: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            phone: entity.phone,
            avatar: entity.avatar,
            role: entity.role,
            company: entity.company,
            bio: entity.bio,
            address: entity.address,
            social_links: entity.social_links,
            is_verified: entity.is_verified,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }

    pub fn agent_summary(&self) -> AgentSummary {
        AgentSummary {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            avatar: self.avatar.clone(),
            company: self.company.clone(),
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            avatar: self.avatar,
            role: self.role,
            company: self.company,
            bio: self.bio,
            address: self.address.map(address_into_dto),
            social_links: self.social_links.map(social_links_into_dto),
            is_verified: self.is_verified,
            is_active: self.is_active,
            property_count: None,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// User together with the number of listings they own.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithPropertyCount {
    pub user: User,
    pub property_count: u64,
}

impl UserWithPropertyCount {
    pub fn into_dto(self) -> UserDto {
        let mut dto = self.user.into_dto();
        dto.property_count = Some(self.property_count);
        dto
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl UserSummary {
    pub fn into_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Contact details of the agent responsible for a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSummary {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub company: Option<String>,
}

impl AgentSummary {
    pub fn into_dto(self) -> AgentSummaryDto {
        AgentSummaryDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            avatar: self.avatar,
            company: self.company,
        }
    }
}

fn address_into_dto(address: UserAddress) -> UserAddressDto {
    UserAddressDto {
        street: address.street,
        city: address.city,
        state: address.state,
        zip_code: address.zip_code,
        country: address.country,
    }
}

fn social_links_into_dto(links: SocialLinks) -> SocialLinksDto {
    SocialLinksDto {
        facebook: links.facebook,
        twitter: links.twitter,
        linkedin: links.linkedin,
        instagram: links.instagram,
    }
}

/// Validated registration input. The password is still in plain text here and
/// is hashed by the auth service.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub role: Role,
}

impl TryFrom<RegisterDto> for RegisterParam {
    type Error = ValidationError;

    fn try_from(dto: RegisterDto) -> Result<Self, Self::Error> {
        let mut v = Validator::new();
        v.required("name", &dto.name, Some(50));
        v.email("email", dto.email.trim());
        v.min_len("password", &dto.password, 6);
        v.max_len("phone", dto.phone.as_deref(), 20);
        if dto.role == Some(Role::Admin) {
            v.error("role", "\"role\" must be one of [user, agent]");
        }
        v.finish()?;

        Ok(Self {
            name: dto.name.trim().to_string(),
            email: normalize_email(&dto.email),
            password: dto.password,
            phone: dto.phone,
            role: dto.role.unwrap_or(Role::User),
        })
    }
}

/// Row to insert into the user table.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub role: Role,
}

/// Profile changes. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserParam {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub company: Option<String>,
    pub bio: Option<String>,
    pub address: Option<UserAddress>,
    pub social_links: Option<SocialLinks>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    pub is_verified: Option<bool>,
}

impl UpdateUserParam {
    /// Validates a profile update.
    ///
    /// Administrative fields are dropped unless `allow_admin_fields` is set.
    pub fn from_dto(dto: UpdateUserDto, allow_admin_fields: bool) -> Result<Self, ValidationError> {
        let mut v = Validator::new();
        if let Some(name) = &dto.name {
            v.required("name", name, Some(50));
        }
        v.max_len("phone", dto.phone.as_deref(), 20);
        v.max_len("company", dto.company.as_deref(), 100);
        v.max_len("bio", dto.bio.as_deref(), 500);
        if let Some(links) = &dto.social_links {
            v.uri_or_empty("socialLinks.facebook", links.facebook.as_deref());
            v.uri_or_empty("socialLinks.twitter", links.twitter.as_deref());
            v.uri_or_empty("socialLinks.linkedin", links.linkedin.as_deref());
            v.uri_or_empty("socialLinks.instagram", links.instagram.as_deref());
        }
        v.finish()?;

        let (role, is_active, is_verified) = if allow_admin_fields {
            (dto.role, dto.is_active, dto.is_verified)
        } else {
            (None, None, None)
        };

        Ok(Self {
            name: dto.name.map(|n| n.trim().to_string()),
            phone: dto.phone,
            avatar: dto.avatar,
            company: dto.company,
            bio: dto.bio,
            address: dto.address.map(|a| UserAddress {
                street: a.street,
                city: a.city,
                state: a.state,
                zip_code: a.zip_code,
                country: a.country,
            }),
            social_links: dto.social_links.map(|l| SocialLinks {
                facebook: l.facebook,
                twitter: l.twitter,
                linkedin: l.linkedin,
                instagram: l.instagram,
            }),
            role,
            is_active,
            is_verified,
        })
    }
}

/// Filters for the admin user listing.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    /// Substring matched against name or email.
    pub search: Option<String>,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl TryFrom<LoginDto> for LoginParam {
    type Error = ValidationError;

    fn try_from(dto: LoginDto) -> Result<Self, Self::Error> {
        let mut v = Validator::new();
        v.email("email", dto.email.trim());
        v.required("password", &dto.password, None);
        v.finish()?;

        Ok(Self {
            email: normalize_email(&dto.email),
            password: dto.password,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdatePasswordParam {
    pub current_password: String,
    pub new_password: String,
}

impl TryFrom<UpdatePasswordDto> for UpdatePasswordParam {
    type Error = ValidationError;

    fn try_from(dto: UpdatePasswordDto) -> Result<Self, Self::Error> {
        let mut v = Validator::new();
        v.required("currentPassword", &dto.current_password, None);
        v.min_len("newPassword", &dto.new_password, 6);
        v.finish()?;

        Ok(Self {
            current_password: dto.current_password,
            new_password: dto.new_password,
        })
    }
}
