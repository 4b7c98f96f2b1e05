use sea_orm::DatabaseConnection;

use crate::server::{
    data::{favorite::FavoriteRepository, property::PropertyRepository},
    error::AppError,
    model::{
        favorite::Favorite,
        pagination::{Page, PageRequest},
        user::User,
    },
    util::db::is_unique_violation,
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's saved listings.
    ///
    /// Favorites whose listing is gone or deactivated are left out of the
    /// page; `total` still counts every favorite the user holds.
    pub async fn list(&self, user: &User, page: PageRequest) -> Result<Page<Favorite>, AppError> {
        let (favorites, total) = FavoriteRepository::new(self.db)
            .get_paginated(user.id, page)
            .await?;

        let visible = favorites
            .into_iter()
            .filter(|f| f.property.as_ref().is_some_and(|p| p.is_active))
            .collect();

        Ok(Page::new(visible, total, page))
    }

    /// Saves an active listing for the user.
    pub async fn add(&self, user: &User, property_id: i32) -> Result<Favorite, AppError> {
        let property = PropertyRepository::new(self.db)
            .find_by_id(property_id)
            .await?
            .filter(|p| p.is_active)
            .ok_or_else(|| AppError::NotFound("Property not found".to_string()))?;

        let repo = FavoriteRepository::new(self.db);
        if repo.exists(user.id, property.id).await? {
            return Err(already_saved());
        }

        let mut favorite = repo.create(user.id, property.id).await.map_err(|err| {
            if is_unique_violation(&err) {
                already_saved()
            } else {
                err.into()
            }
        })?;
        favorite.property = Some(property);

        Ok(favorite)
    }

    pub async fn remove(&self, user: &User, property_id: i32) -> Result<(), AppError> {
        if !FavoriteRepository::new(self.db)
            .delete(user.id, property_id)
            .await?
        {
            return Err(AppError::NotFound("Favorite not found".to_string()));
        }

        Ok(())
    }

    pub async fn check(&self, user: &User, property_id: i32) -> Result<bool, AppError> {
        Ok(FavoriteRepository::new(self.db)
            .exists(user.id, property_id)
            .await?)
    }
}

fn already_saved() -> AppError {
    AppError::BadRequest("Property already in favorites".to_string())
}
