//! Favorite data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::property::PropertyRepository,
    model::{favorite::Favorite, pagination::PageRequest},
};

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Saves a listing for a user.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The new favorite without its listing loaded
    /// - `Err(DbErr)` - Database error, including a duplicate (user, property) pair
    pub async fn create(&self, user_id: i32, property_id: i32) -> Result<Favorite, DbErr> {
        let entity = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            property_id: ActiveValue::Set(property_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Favorite::from_entity(entity))
    }

    pub async fn exists(&self, user_id: i32, property_id: i32) -> Result<bool, DbErr> {
        let entity = entity::prelude::Favorite::find_by_id((user_id, property_id))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// # Returns
    /// - `Ok(true)` - Favorite removed
    /// - `Ok(false)` - The user had not saved that listing
    pub async fn delete(&self, user_id: i32, property_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_by_id((user_id, property_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets a user's favorites newest first, each with its hydrated listing.
    ///
    /// # Returns
    /// - `Ok((favorites, total))` - Favorites for the page and the user's total favorite count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> Result<(Vec<Favorite>, u64), DbErr> {
        let paginator = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_desc(entity::favorite::Column::CreatedAt)
            .order_by_desc(entity::favorite::Column::PropertyId)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.index()).await?;

        let property_ids: Vec<i32> = entities.iter().map(|e| e.property_id).collect();
        let mut properties = PropertyRepository::new(self.db)
            .find_by_ids(&property_ids)
            .await?;

        let favorites = entities
            .into_iter()
            .map(|entity| {
                let property = properties.remove(&entity.property_id);
                let mut favorite = Favorite::from_entity(entity);
                favorite.property = property;
                favorite
            })
            .collect();

        Ok((favorites, total))
    }
}
