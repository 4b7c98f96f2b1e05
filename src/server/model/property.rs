//! Listing domain models, parameters, filters and sort orders.

use chrono::{DateTime, Utc};
use entity::{
    property::PropertyImage,
    sea_orm_active_enums::{Amenity, ListingType, PriceUnit, PropertyStatus, PropertyType},
};

use crate::{
    model::property::{
        AddressDto, CreatePropertyDto, FeaturesDto, FeaturesInputDto, ImageDto, LocationDto,
        PropertyDto, PropertySummaryDto, UpdatePropertyDto,
    },
    server::{
        error::validation::ValidationError, model::user::AgentSummary, util::validate::Validator,
    },
};

pub const DEFAULT_COUNTRY: &str = "USA";

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// Point on the map plus the geocoder's formatted address.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Location {
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub formatted_address: Option<String>,
}

impl Location {
    fn is_empty(&self) -> bool {
        self.longitude.is_none() && self.latitude.is_none() && self.formatted_address.is_none()
    }

    fn from_dto(dto: LocationDto) -> Self {
        let (longitude, latitude) = match dto.coordinates {
            Some([lng, lat]) => (Some(lng), Some(lat)),
            None => (None, None),
        };

        Self {
            longitude,
            latitude,
            formatted_address: dto.formatted_address,
        }
    }

    fn into_dto(self) -> Option<LocationDto> {
        if self.is_empty() {
            return None;
        }

        let coordinates = match (self.longitude, self.latitude) {
            (Some(lng), Some(lat)) => Some([lng, lat]),
            _ => None,
        };

        Some(LocationDto {
            kind: "Point".to_string(),
            coordinates,
            formatted_address: self.formatted_address,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Features {
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: f64,
    pub year_built: Option<i32>,
    pub parking: i32,
    pub floors: i32,
}

/// A listing with its amenities and, when loaded, its agent.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    pub status: PropertyStatus,
    pub price: f64,
    pub price_unit: PriceUnit,
    pub address: Address,
    pub location: Location,
    pub features: Features,
    pub amenities: Vec<Amenity>,
    pub images: Vec<PropertyImage>,
    pub virtual_tour: Option<String>,
    pub video: Option<String>,
    pub agent_id: i32,
    pub agent: Option<AgentSummary>,
    pub is_featured: bool,
    pub views: i32,
    pub published_at: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - Listing row
    /// - `amenities` - Amenities read from the join table
    /// - `agent` - Owning agent if it was loaded
    pub fn from_entity(
        entity: entity::property::Model,
        amenities: Vec<Amenity>,
        agent: Option<AgentSummary>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            description: entity.description,
            property_type: entity.property_type,
            listing_type: entity.listing_type,
            status: entity.status,
            price: entity.price,
            price_unit: entity.price_unit,
            address: Address {
                street: entity.address_street,
                city: entity.address_city,
                state: entity.address_state,
                zip_code: entity.address_zip_code,
                country: entity.address_country,
            },
            location: Location {
                longitude: entity.longitude,
                latitude: entity.latitude,
                formatted_address: entity.formatted_address,
            },
            features: Features {
                bedrooms: entity.bedrooms,
                bathrooms: entity.bathrooms,
                area: entity.area,
                year_built: entity.year_built,
                parking: entity.parking,
                floors: entity.floors,
            },
            amenities,
            images: entity.images.0,
            virtual_tour: entity.virtual_tour,
            video: entity.video,
            agent_id: entity.agent_id,
            agent,
            is_featured: entity.is_featured,
            views: entity.views,
            published_at: entity.published_at,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn is_owned_by(&self, user_id: i32) -> bool {
        self.agent_id == user_id
    }

    pub fn into_dto(self) -> PropertyDto {
        PropertyDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            property_type: self.property_type,
            listing_type: self.listing_type,
            status: self.status,
            price: self.price,
            price_unit: self.price_unit,
            address: AddressDto {
                street: self.address.street,
                city: self.address.city,
                state: self.address.state,
                zip_code: self.address.zip_code,
                country: Some(self.address.country),
            },
            location: self.location.into_dto(),
            features: FeaturesDto {
                bedrooms: self.features.bedrooms,
                bathrooms: self.features.bathrooms,
                area: self.features.area,
                year_built: self.features.year_built,
                parking: self.features.parking,
                floors: self.features.floors,
            },
            amenities: self.amenities,
            images: self.images.into_iter().map(image_into_dto).collect(),
            virtual_tour: self.virtual_tour,
            video: self.video,
            agent_id: self.agent_id,
            agent: self.agent.map(AgentSummary::into_dto),
            is_featured: self.is_featured,
            views: self.views,
            published_at: self.published_at,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Compact listing reference used by inquiries and dashboards.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySummary {
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

impl PropertySummary {
    pub fn from_entity(entity: &entity::property::Model) -> Self {
        let main_image = entity
            .images
            .0
            .iter()
            .find(|image| image.is_main)
            .or_else(|| entity.images.0.first())
            .map(|image| image.url.clone());

        Self {
            id: entity.id,
            title: entity.title.clone(),
            slug: entity.slug.clone(),
            price: entity.price,
            status: entity.status,
            city: entity.address_city.clone(),
            state: entity.address_state.clone(),
            views: entity.views,
            main_image,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PropertySummaryDto {
        PropertySummaryDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            price: self.price,
            status: self.status,
            city: self.city,
            state: self.state,
            views: self.views,
            main_image: self.main_image,
            created_at: self.created_at,
        }
    }
}

fn image_into_dto(image: PropertyImage) -> ImageDto {
    ImageDto {
        url: image.url,
        public_id: image.public_id,
        caption: image.caption,
        is_main: image.is_main,
    }
}

fn image_from_dto(image: ImageDto) -> PropertyImage {
    PropertyImage {
        url: image.url,
        public_id: image.public_id,
        caption: image.caption,
        is_main: image.is_main,
    }
}

/// Validated input for a new listing. The slug and owner are assigned by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePropertyParam {
    pub title: String,
    pub description: String,
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    pub status: PropertyStatus,
    pub price: f64,
    pub price_unit: PriceUnit,
    pub address: Address,
    pub location: Location,
    pub features: Features,
    pub amenities: Vec<Amenity>,
    pub images: Vec<PropertyImage>,
    pub virtual_tour: Option<String>,
    pub video: Option<String>,
    pub is_featured: bool,
}

impl TryFrom<CreatePropertyDto> for CreatePropertyParam {
    type Error = ValidationError;

    fn try_from(dto: CreatePropertyDto) -> Result<Self, Self::Error> {
        let mut v = Validator::new();
        v.required("title", &dto.title, Some(100));
        v.required("description", &dto.description, Some(5000));
        v.positive("price", dto.price);
        v.required("address.street", &dto.address.street, None);
        v.required("address.city", &dto.address.city, None);
        v.required("address.state", &dto.address.state, None);
        v.required("address.zipCode", &dto.address.zip_code, None);
        match dto.features.area {
            Some(area) => v.positive("features.area", area),
            None => v.error("features.area", "\"features.area\" is required"),
        }
        validate_features(&mut v, &dto.features);
        validate_media(&mut v, dto.virtual_tour.as_deref(), dto.video.as_deref(), &dto.images);
        if let Some(location) = &dto.location {
            validate_location(&mut v, location);
        }
        v.finish()?;

        let country = dto
            .address
            .country
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COUNTRY.to_string());

        Ok(Self {
            title: dto.title.trim().to_string(),
            description: dto.description,
            property_type: dto.property_type,
            listing_type: dto.listing_type,
            status: dto.status.unwrap_or(PropertyStatus::Available),
            price: dto.price,
            price_unit: dto.price_unit.unwrap_or(PriceUnit::Total),
            address: Address {
                street: dto.address.street,
                city: dto.address.city,
                state: dto.address.state,
                zip_code: dto.address.zip_code,
                country,
            },
            location: dto.location.map(Location::from_dto).unwrap_or_default(),
            features: Features {
                bedrooms: dto.features.bedrooms.unwrap_or(0),
                bathrooms: dto.features.bathrooms.unwrap_or(0),
                area: dto.features.area.unwrap_or_default(),
                year_built: dto.features.year_built,
                parking: dto.features.parking.unwrap_or(0),
                floors: dto.features.floors.unwrap_or(1),
            },
            amenities: dedup(dto.amenities),
            images: dto.images.into_iter().map(image_from_dto).collect(),
            virtual_tour: dto.virtual_tour,
            video: dto.video,
            is_featured: dto.is_featured.unwrap_or(false),
        })
    }
}

/// Partial address update merged field by field into the stored address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressUpdate {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeaturesUpdate {
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub area: Option<f64>,
    pub year_built: Option<i32>,
    pub parking: Option<i32>,
    pub floors: Option<i32>,
}

/// Validated listing changes. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePropertyParam {
    pub title: Option<String>,
    pub description: Option<String>,
    pub property_type: Option<PropertyType>,
    pub listing_type: Option<ListingType>,
    pub status: Option<PropertyStatus>,
    pub price: Option<f64>,
    pub price_unit: Option<PriceUnit>,
    pub address: AddressUpdate,
    pub location: Option<Location>,
    pub features: FeaturesUpdate,
    pub amenities: Option<Vec<Amenity>>,
    pub images: Option<Vec<PropertyImage>>,
    pub virtual_tour: Option<String>,
    pub video: Option<String>,
    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
}

impl TryFrom<UpdatePropertyDto> for UpdatePropertyParam {
    type Error = ValidationError;

    fn try_from(dto: UpdatePropertyDto) -> Result<Self, Self::Error> {
        let mut v = Validator::new();
        if let Some(title) = &dto.title {
            v.required("title", title, Some(100));
        }
        if let Some(description) = &dto.description {
            v.required("description", description, Some(5000));
        }
        if let Some(price) = dto.price {
            v.positive("price", price);
        }
        let address = dto.address.unwrap_or_default();
        for (field, value) in [
            ("address.street", &address.street),
            ("address.city", &address.city),
            ("address.state", &address.state),
            ("address.zipCode", &address.zip_code),
        ] {
            if let Some(value) = value {
                v.required(field, value, None);
            }
        }
        let features = dto.features.unwrap_or_default();
        if let Some(area) = features.area {
            v.positive("features.area", area);
        }
        validate_features(&mut v, &features);
        validate_media(
            &mut v,
            dto.virtual_tour.as_deref(),
            dto.video.as_deref(),
            dto.images.as_deref().unwrap_or_default(),
        );
        if let Some(location) = &dto.location {
            validate_location(&mut v, location);
        }
        v.finish()?;

        Ok(Self {
            title: dto.title.map(|t| t.trim().to_string()),
            description: dto.description,
            property_type: dto.property_type,
            listing_type: dto.listing_type,
            status: dto.status,
            price: dto.price,
            price_unit: dto.price_unit,
            address: AddressUpdate {
                street: address.street,
                city: address.city,
                state: address.state,
                zip_code: address.zip_code,
                country: address.country,
            },
            location: dto.location.map(Location::from_dto),
            features: FeaturesUpdate {
                bedrooms: features.bedrooms,
                bathrooms: features.bathrooms,
                area: features.area,
                year_built: features.year_built,
                parking: features.parking,
                floors: features.floors,
            },
            amenities: dto.amenities.map(dedup),
            images: dto
                .images
                .map(|images| images.into_iter().map(image_from_dto).collect()),
            virtual_tour: dto.virtual_tour,
            video: dto.video,
            is_featured: dto.is_featured,
            is_active: dto.is_active,
        })
    }
}

fn validate_features(v: &mut Validator, features: &FeaturesInputDto) {
    v.at_least("features.bedrooms", features.bedrooms, 0);
    v.at_least("features.bathrooms", features.bathrooms, 0);
    v.at_least("features.parking", features.parking, 0);
    v.at_least("features.floors", features.floors, 1);
    v.year_built("features.yearBuilt", features.year_built);
}

fn validate_media(
    v: &mut Validator,
    virtual_tour: Option<&str>,
    video: Option<&str>,
    images: &[ImageDto],
) {
    v.uri_or_empty("virtualTour", virtual_tour);
    v.uri_or_empty("video", video);
    for (i, image) in images.iter().enumerate() {
        v.required(&format!("images.{}.url", i), &image.url, None);
    }
}

fn validate_location(v: &mut Validator, location: &LocationDto) {
    if let Some([lng, lat]) = location.coordinates {
        if !(-180.0..=180.0).contains(&lng) || !(-90.0..=90.0).contains(&lat) {
            v.error(
                "location.coordinates",
                "\"location.coordinates\" must be [longitude, latitude] within range",
            );
        }
    }
}

fn dedup(amenities: Vec<Amenity>) -> Vec<Amenity> {
    let mut unique = Vec::with_capacity(amenities.len());
    for amenity in amenities {
        if !unique.contains(&amenity) {
            unique.push(amenity);
        }
    }
    unique
}

/// Listing filters. Every `Some` criterion must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    /// `Some(true)` for public listings, `None` to include deactivated ones.
    pub is_active: Option<bool>,
    pub property_type: Option<PropertyType>,
    pub listing_type: Option<ListingType>,
    pub status: Option<PropertyStatus>,
    /// Case-insensitive substring of the city.
    pub city: Option<String>,
    /// Case-insensitive substring of the state.
    pub state: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Minimum number of bedrooms.
    pub bedrooms: Option<i32>,
    /// Minimum number of bathrooms.
    pub bathrooms: Option<i32>,
    pub min_area: Option<f64>,
    pub max_area: Option<f64>,
    /// The listing must have every amenity in the list.
    pub amenities: Vec<Amenity>,
    pub featured: Option<bool>,
    pub agent_id: Option<i32>,
    /// Case-insensitive substring of title, description or city.
    pub search: Option<String>,
}

impl PropertyFilter {
    pub fn active() -> Self {
        Self {
            is_active: Some(true),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertySort {
    PriceAsc,
    PriceDesc,
    #[default]
    Newest,
    Oldest,
    /// Most viewed first.
    Popular,
}

impl PropertySort {
    /// Parses the `sort` query value. Unknown or missing values sort newest first.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("price-asc") => Self::PriceAsc,
            Some("price-desc") => Self::PriceDesc,
            Some("oldest") => Self::Oldest,
            Some("popular") => Self::Popular,
            _ => Self::Newest,
        }
    }
}
