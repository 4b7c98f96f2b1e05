//! Property factory for creating test listings.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::{
    property::PropertyImages,
    sea_orm_active_enums::{Amenity, ListingType, PriceUnit, PropertyStatus, PropertyType},
};
use sea_orm::{ActiveEnum, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test listings with customizable fields.
///
/// Amenities added with `amenities()` are inserted into the join table after
/// the listing itself.
///
/// # Example
///
/// ```rust,ignore
/// let property = PropertyFactory::new(&db, agent.id)
///     .title("Lake House")
///     .city("Austin")
///     .amenities(vec![Amenity::Pool])
///     .build()
///     .await?;
/// ```
pub struct PropertyFactory<'a> {
    db: &'a DatabaseConnection,
    agent_id: i32,
    title: String,
    slug: String,
    property_type: PropertyType,
    listing_type: ListingType,
    status: PropertyStatus,
    price: f64,
    city: String,
    state: String,
    bedrooms: i32,
    bathrooms: i32,
    area: f64,
    amenities: Vec<Amenity>,
    is_featured: bool,
    is_active: bool,
    views: i32,
    created_at: DateTime<Utc>,
}

impl<'a> PropertyFactory<'a> {
    /// Creates a new PropertyFactory with default values.
    ///
    /// Defaults: an active, available house for sale in Springfield, IL
    /// priced at 250000 with 3 bedrooms, 2 bathrooms and 1500 sqft.
    pub fn new(db: &'a DatabaseConnection, agent_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            agent_id,
            title: format!("Property {}", id),
            slug: format!("property-{}", id),
            property_type: PropertyType::House,
            listing_type: ListingType::Sale,
            status: PropertyStatus::Available,
            price: 250_000.0,
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            bedrooms: 3,
            bathrooms: 2,
            area: 1500.0,
            amenities: Vec::new(),
            is_featured: false,
            is_active: true,
            views: 0,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = property_type;
        self
    }

    pub fn listing_type(mut self, listing_type: ListingType) -> Self {
        self.listing_type = listing_type;
        self
    }

    pub fn status(mut self, status: PropertyStatus) -> Self {
        self.status = status;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn bedrooms(mut self, bedrooms: i32) -> Self {
        self.bedrooms = bedrooms;
        self
    }

    pub fn bathrooms(mut self, bathrooms: i32) -> Self {
        self.bathrooms = bathrooms;
        self
    }

    pub fn area(mut self, area: f64) -> Self {
        self.area = area;
        self
    }

    pub fn amenities(mut self, amenities: Vec<Amenity>) -> Self {
        self.amenities = amenities;
        self
    }

    pub fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = is_featured;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn views(mut self, views: i32) -> Self {
        self.views = views;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the listing and its amenities.
    ///
    /// # Returns
    /// - `Ok(entity::property::Model)` - Created listing
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::property::Model, DbErr> {
        let description = "A lovely place to live.".to_string();
        let property = entity::property::ActiveModel {
            title_lower: ActiveValue::Set(self.title.to_lowercase()),
            description_lower: ActiveValue::Set(description.to_lowercase()),
            address_city_lower: ActiveValue::Set(self.city.to_lowercase()),
            address_state_lower: ActiveValue::Set(self.state.to_lowercase()),
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(description),
            property_type: ActiveValue::Set(self.property_type),
            listing_type: ActiveValue::Set(self.listing_type),
            status: ActiveValue::Set(self.status),
            price: ActiveValue::Set(self.price),
            price_unit: ActiveValue::Set(PriceUnit::Total),
            address_street: ActiveValue::Set("1 Main St".to_string()),
            address_city: ActiveValue::Set(self.city),
            address_state: ActiveValue::Set(self.state),
            address_zip_code: ActiveValue::Set("62701".to_string()),
            address_country: ActiveValue::Set("USA".to_string()),
            longitude: ActiveValue::Set(None),
            latitude: ActiveValue::Set(None),
            formatted_address: ActiveValue::Set(None),
            bedrooms: ActiveValue::Set(self.bedrooms),
            bathrooms: ActiveValue::Set(self.bathrooms),
            area: ActiveValue::Set(self.area),
            year_built: ActiveValue::Set(None),
            parking: ActiveValue::Set(0),
            floors: ActiveValue::Set(1),
            images: ActiveValue::Set(PropertyImages::default()),
            virtual_tour: ActiveValue::Set(None),
            video: ActiveValue::Set(None),
            agent_id: ActiveValue::Set(self.agent_id),
            is_featured: ActiveValue::Set(self.is_featured),
            views: ActiveValue::Set(self.views),
            published_at: ActiveValue::Set(self.created_at),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for amenity in self.amenities {
            entity::property_amenity::ActiveModel {
                property_id: ActiveValue::Set(property.id),
                amenity: ActiveValue::Set(amenity.to_value()),
            }
            .insert(self.db)
            .await?;
        }

        Ok(property)
    }
}

/// Creates a listing with default values owned by `agent_id`.
pub async fn create_property(
    db: &DatabaseConnection,
    agent_id: i32,
) -> Result<entity::property::Model, DbErr> {
    PropertyFactory::new(db, agent_id).build().await
}
