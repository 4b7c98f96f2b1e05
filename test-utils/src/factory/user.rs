//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::Role;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Placeholder stored in `password_hash` when a test does not need to log in.
pub const UNUSABLE_PASSWORD_HASH: &str = "!unusable";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .name("Jane Agent")
///     .role(Role::Agent)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password_hash: String,
    role: Role,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"User {id}"`
    /// - email: `"user{id}@example.com"`
    /// - role: `Role::User`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            password_hash: UNUSABLE_PASSWORD_HASH.to_string(),
            role: Role::User,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash. Pass a real argon2 hash when the test logs in.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            name_lower: ActiveValue::Set(self.name.to_lowercase()),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            phone: ActiveValue::Set(None),
            avatar: ActiveValue::Set(None),
            role: ActiveValue::Set(self.role),
            company: ActiveValue::Set(None),
            bio: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            social_links: ActiveValue::Set(None),
            is_verified: ActiveValue::Set(false),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a regular user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an active user with the agent role.
pub async fn create_agent(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(Role::Agent).build().await
}

/// Creates an active user with the admin role.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(Role::Admin).build().await
}
