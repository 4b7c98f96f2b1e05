//! User data repository for database operations.
//!
//! Handles account creation, profile updates, soft deletion and the paginated
//! user and agent listings, converting entity models to `User` domain models at
//! the repository boundary.

use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    pagination::PageRequest,
    user::{CreateUserParam, UpdateUserParam, User, UserFilter},
};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active, unverified user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a duplicate email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            name_lower: ActiveValue::Set(param.name.to_lowercase()),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            phone: ActiveValue::Set(param.phone),
            avatar: ActiveValue::Set(None),
            role: ActiveValue::Set(param.role),
            company: ActiveValue::Set(None),
            bio: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            social_links: ActiveValue::Set(None),
            is_verified: ActiveValue::Set(false),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id regardless of whether the account is active.
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by their (already normalized) email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Loads several users at once, keyed by id. Missing ids are simply absent.
    pub async fn find_by_ids(&self, user_ids: &[i32]) -> Result<HashMap<i32, User>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|e| (e.id, User::from_entity(e)))
            .collect())
    }

    /// Gets users matching `filter`, newest first.
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and the number of matching users
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        filter: &UserFilter,
        page: PageRequest,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let mut condition = Condition::all();
        if let Some(role) = filter.role {
            condition = condition.add(entity::user::Column::Role.eq(role));
        }
        if let Some(is_active) = filter.is_active {
            condition = condition.add(entity::user::Column::IsActive.eq(is_active));
        }
        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            condition = condition.add(
                Condition::any()
                    .add(entity::user::Column::NameLower.contains(needle.as_str()))
                    .add(entity::user::Column::Email.contains(needle.as_str())),
            );
        }

        let paginator = entity::prelude::User::find()
            .filter(condition)
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.index()).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, total))
    }

    /// Gets active agents and admins, optionally filtered by a name substring,
    /// ordered by name.
    pub async fn get_agents_paginated(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let mut query = entity::prelude::User::find()
            .filter(entity::user::Column::Role.is_in([Role::Agent, Role::Admin]))
            .filter(entity::user::Column::IsActive.eq(true));

        if let Some(search) = search.filter(|s| !s.is_empty()) {
            query = query
                .filter(entity::user::Column::NameLower.contains(search.to_lowercase()));
        }

        let paginator = query
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.index()).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, total))
    }

    /// Applies profile changes to a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        user_id: i32,
        param: UpdateUserParam,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        if let Some(name) = param.name {
            active.name_lower = ActiveValue::Set(name.to_lowercase());
            active.name = ActiveValue::Set(name);
        }
        if let Some(phone) = param.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(avatar) = param.avatar {
            active.avatar = ActiveValue::Set(Some(avatar));
        }
        if let Some(company) = param.company {
            active.company = ActiveValue::Set(Some(company));
        }
        if let Some(bio) = param.bio {
            active.bio = ActiveValue::Set(Some(bio));
        }
        if let Some(address) = param.address {
            active.address = ActiveValue::Set(Some(address));
        }
        if let Some(social_links) = param.social_links {
            active.social_links = ActiveValue::Set(Some(social_links));
        }
        if let Some(role) = param.role {
            active.role = ActiveValue::Set(role);
        }
        if let Some(is_active) = param.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        if let Some(is_verified) = param.is_verified {
            active.is_verified = ActiveValue::Set(is_verified);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Replaces the stored password hash.
    pub async fn update_password(&self, user_id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Soft deletes a user by clearing `is_active`.
    ///
    /// # Returns
    /// - `Ok(true)` - User found and deactivated
    /// - `Ok(false)` - No user with that id
    pub async fn deactivate(&self, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::IsActive,
                sea_orm::sea_query::Expr::value(false),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts active users, optionally restricted to the given roles.
    pub async fn count_active(&self, roles: Option<&[Role]>) -> Result<u64, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::IsActive.eq(true));

        if let Some(roles) = roles {
            query = query.filter(entity::user::Column::Role.is_in(roles.to_vec()));
        }

        query.count(self.db).await
    }

    /// Counts every stored user. Used to decide whether demo data may be seeded.
    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }
}
