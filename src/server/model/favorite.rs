use chrono::{DateTime, Utc};

use crate::{model::favorite::FavoriteDto, server::model::property::Property};

/// A listing saved by a user. `property` is `None` when the listing could not be loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub user_id: i32,
    pub property_id: i32,
    pub property: Option<Property>,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn from_entity(entity: entity::favorite::Model) -> Self {
        Self {
            user_id: entity.user_id,
            property_id: entity.property_id,
            property: None,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            property_id: self.property_id,
            property: self.property.map(Property::into_dto),
            created_at: self.created_at,
        }
    }
}
