use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{ListingType, PriceUnit, PropertyStatus, PropertyType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "property")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    pub status: PropertyStatus,
    pub price: f64,
    pub price_unit: PriceUnit,
    pub address_street: String,
    pub address_city: String,
    pub address_state: String,
    pub address_zip_code: String,
    pub address_country: String,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub formatted_address: Option<String>,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: f64,
    pub year_built: Option<i32>,
    pub parking: i32,
    pub floors: i32,
    #[sea_orm(column_type = "Json")]
    pub images: PropertyImages,
    pub virtual_tour: Option<String>,
    pub video: Option<String>,
    pub agent_id: i32,
    pub is_featured: bool,
    pub views: i32,
    pub published_at: DateTimeUtc,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    /// Unicode-lowercased copies of the searchable text columns.
    pub title_lower: String,
    #[sea_orm(column_type = "Text")]
    pub description_lower: String,
    pub address_city_lower: String,
    pub address_state_lower: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyImage {
    pub url: String,
    pub public_id: Option<String>,
    pub caption: Option<String>,
    pub is_main: bool,
}

/// Ordered image gallery of a listing, stored as a single JSON column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct PropertyImages(pub Vec<PropertyImage>);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AgentId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::property_amenity::Entity")]
    PropertyAmenity,
    #[sea_orm(has_many = "super::inquiry::Entity")]
    Inquiry,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::property_amenity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PropertyAmenity.def()
    }
}

impl Related<super::inquiry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inquiry.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
