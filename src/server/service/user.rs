use sea_orm::DatabaseConnection;

use crate::server::{
    data::{property::PropertyRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        pagination::{Page, PageRequest},
        user::{UpdateUserParam, User, UserFilter, UserWithPropertyCount},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, filter: &UserFilter, page: PageRequest) -> Result<Page<User>, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_paginated(filter, page)
            .await?;

        Ok(Page::new(users, total, page))
    }

    /// Lists active agents and admins with their number of active listings.
    pub async fn agents(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<UserWithPropertyCount>, AppError> {
        let (agents, total) = UserRepository::new(self.db)
            .get_agents_paginated(search, page)
            .await?;

        let agent_ids: Vec<i32> = agents.iter().map(|a| a.id).collect();
        let counts = PropertyRepository::new(self.db)
            .counts_by_agent(&agent_ids, true)
            .await?;

        let agents = agents
            .into_iter()
            .map(|user| UserWithPropertyCount {
                property_count: counts.get(&user.id).copied().unwrap_or(0),
                user,
            })
            .collect();

        Ok(Page::new(agents, total, page))
    }

    /// Gets a user with the number of listings they own, active or not.
    ///
    /// Regular users always report zero listings.
    pub async fn get(&self, user_id: i32) -> Result<UserWithPropertyCount, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let property_count = if user.role.can_list() {
            PropertyRepository::new(self.db)
                .counts_by_agent(&[user.id], false)
                .await?
                .get(&user.id)
                .copied()
                .unwrap_or(0)
        } else {
            0
        };

        Ok(UserWithPropertyCount {
            user,
            property_count,
        })
    }

    /// Updates a profile. Only the user themself or an admin may do so.
    pub async fn update(
        &self,
        actor: &User,
        user_id: i32,
        param: UpdateUserParam,
    ) -> Result<User, AppError> {
        if actor.id != user_id && !actor.is_admin() {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Not authorized to update this user".to_string(),
            )
            .into());
        }

        UserRepository::new(self.db)
            .update(user_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Soft deletes a user.
    pub async fn deactivate(&self, user_id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).deactivate(user_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!(user_id, "Deactivated user");

        Ok(())
    }
}
