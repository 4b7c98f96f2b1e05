use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[sea_orm(string_value = "user")]
    User,
    #[sea_orm(string_value = "agent")]
    Agent,
    #[sea_orm(string_value = "admin")]
    Admin,
}

impl Role {
    /// Agents and admins may manage listings.
    pub fn can_list(&self) -> bool {
        matches!(self, Role::Agent | Role::Admin)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    #[sea_orm(string_value = "house")]
    House,
    #[sea_orm(string_value = "apartment")]
    Apartment,
    #[sea_orm(string_value = "condo")]
    Condo,
    #[sea_orm(string_value = "townhouse")]
    Townhouse,
    #[sea_orm(string_value = "villa")]
    Villa,
    #[sea_orm(string_value = "land")]
    Land,
    #[sea_orm(string_value = "commercial")]
    Commercial,
    #[sea_orm(string_value = "office")]
    Office,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    #[sea_orm(string_value = "sale")]
    Sale,
    #[sea_orm(string_value = "rent")]
    Rent,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    #[sea_orm(string_value = "available")]
    Available,
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "sold")]
    Sold,
    #[sea_orm(string_value = "rented")]
    Rented,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum PriceUnit {
    #[sea_orm(string_value = "total")]
    Total,
    #[sea_orm(string_value = "monthly")]
    Monthly,
    #[sea_orm(string_value = "yearly")]
    Yearly,
    #[sea_orm(string_value = "sqft")]
    Sqft,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "kebab-case")]
pub enum Amenity {
    #[sea_orm(string_value = "air-conditioning")]
    AirConditioning,
    #[sea_orm(string_value = "heating")]
    Heating,
    #[sea_orm(string_value = "washer-dryer")]
    WasherDryer,
    #[sea_orm(string_value = "dishwasher")]
    Dishwasher,
    #[sea_orm(string_value = "pool")]
    Pool,
    #[sea_orm(string_value = "gym")]
    Gym,
    #[sea_orm(string_value = "security")]
    Security,
    #[sea_orm(string_value = "elevator")]
    Elevator,
    #[sea_orm(string_value = "balcony")]
    Balcony,
    #[sea_orm(string_value = "garden")]
    Garden,
    #[sea_orm(string_value = "garage")]
    Garage,
    #[sea_orm(string_value = "fireplace")]
    Fireplace,
    #[sea_orm(string_value = "hardwood-floors")]
    HardwoodFloors,
    #[sea_orm(string_value = "pet-friendly")]
    PetFriendly,
    #[sea_orm(string_value = "furnished")]
    Furnished,
    #[sea_orm(string_value = "waterfront")]
    Waterfront,
    #[sea_orm(string_value = "mountain-view")]
    MountainView,
    #[sea_orm(string_value = "city-view")]
    CityView,
    #[sea_orm(string_value = "smart-home")]
    SmartHome,
    #[sea_orm(string_value = "solar-panels")]
    SolarPanels,
    #[sea_orm(string_value = "storage")]
    Storage,
    #[sea_orm(string_value = "laundry")]
    Laundry,
    #[sea_orm(string_value = "doorman")]
    Doorman,
    #[sea_orm(string_value = "rooftop")]
    Rooftop,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    #[sea_orm(string_value = "general")]
    General,
    #[sea_orm(string_value = "viewing")]
    Viewing,
    #[sea_orm(string_value = "offer")]
    Offer,
    #[sea_orm(string_value = "question")]
    Question,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    #[sea_orm(string_value = "email")]
    Email,
    #[sea_orm(string_value = "phone")]
    Phone,
    #[sea_orm(string_value = "both")]
    Both,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum ContactTime {
    #[sea_orm(string_value = "morning")]
    Morning,
    #[sea_orm(string_value = "afternoon")]
    Afternoon,
    #[sea_orm(string_value = "evening")]
    Evening,
    #[sea_orm(string_value = "anytime")]
    Anytime,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[sea_orm(string_value = "new")]
    New,
    #[sea_orm(string_value = "read")]
    Read,
    #[sea_orm(string_value = "responded")]
    Responded,
    #[sea_orm(string_value = "closed")]
    Closed,
}
