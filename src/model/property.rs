use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{
    Amenity, ListingType, PriceUnit, PropertyStatus, PropertyType,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::AgentSummaryDto;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(default)]
    pub country: Option<String>,
}

/// Partial address; only the provided fields replace stored values.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AddressUpdateDto {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

/// GeoJSON point. `coordinates` is `[longitude, latitude]`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    #[serde(rename = "type", default = "point")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: Option<[f64; 2]>,
    #[serde(default)]
    pub formatted_address: Option<String>,
}

fn point() -> String {
    "Point".to_string()
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesDto {
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: f64,
    pub year_built: Option<i32>,
    pub parking: i32,
    pub floors: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesInputDto {
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub area: Option<f64>,
    pub year_built: Option<i32>,
    pub parking: Option<i32>,
    pub floors: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageDto {
    pub url: String,
    #[serde(default, rename = "public_id")]
    pub public_id: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub is_main: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    pub status: PropertyStatus,
    pub price: f64,
    pub price_unit: PriceUnit,
    pub address: AddressDto,
    pub location: Option<LocationDto>,
    pub features: FeaturesDto,
    pub amenities: Vec<Amenity>,
    pub images: Vec<ImageDto>,
    pub virtual_tour: Option<String>,
    pub video: Option<String>,
    pub agent_id: i32,
    pub agent: Option<AgentSummaryDto>,
    pub is_featured: bool,
    pub views: i32,
    pub published_at: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing reference embedded in inquiries and stats.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummaryDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub price: f64,
    pub status: PropertyStatus,
    pub city: String,
    pub state: String,
    pub views: i32,
    pub main_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyDto {
    pub title: String,
    pub description: String,
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    pub status: Option<PropertyStatus>,
    pub price: f64,
    pub price_unit: Option<PriceUnit>,
    pub address: AddressDto,
    pub location: Option<LocationDto>,
    pub features: FeaturesInputDto,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    #[serde(default)]
    pub images: Vec<ImageDto>,
    pub virtual_tour: Option<String>,
    pub video: Option<String>,
    pub is_featured: Option<bool>,
}

/// Partial listing update. Absent fields keep their stored values; `amenities`
/// and `images` replace the stored lists when present.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub property_type: Option<PropertyType>,
    pub listing_type: Option<ListingType>,
    pub status: Option<PropertyStatus>,
    pub price: Option<f64>,
    pub price_unit: Option<PriceUnit>,
    pub address: Option<AddressUpdateDto>,
    pub location: Option<LocationDto>,
    pub features: Option<FeaturesInputDto>,
    pub amenities: Option<Vec<Amenity>>,
    pub images: Option<Vec<ImageDto>>,
    pub virtual_tour: Option<String>,
    pub video: Option<String>,
    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
}
