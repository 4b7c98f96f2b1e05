use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        pagination::PageRequest,
        property::{
            Address, CreatePropertyParam, Features, Location, PropertyFilter,
            UpdatePropertyParam,
        },
        user::User,
    },
    service::property::PropertyService,
};
use entity::sea_orm_active_enums::{ListingType, PriceUnit, PropertyStatus, PropertyType};
use test_utils::{builder::TestBuilder, factory};

mod featured;
mod get;
mod mine;
mod update;

fn create_param(title: &str) -> CreatePropertyParam {
    CreatePropertyParam {
        title: title.to_string(),
        description: "Two bedroom flat close to the river".to_string(),
        property_type: PropertyType::Apartment,
        listing_type: ListingType::Rent,
        status: PropertyStatus::Available,
        price: 1_800.0,
        price_unit: PriceUnit::Monthly,
        address: Address {
            street: "8 River Rd".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip_code: "73301".to_string(),
            country: "USA".to_string(),
        },
        location: Location::default(),
        features: Features {
            bedrooms: 2,
            bathrooms: 1,
            area: 900.0,
            year_built: None,
            parking: 1,
            floors: 1,
        },
        amenities: Vec::new(),
        images: Vec::new(),
        virtual_tour: None,
        video: None,
        is_featured: false,
    }
}
