//! SeaORM entity definitions for the listing database.

pub mod prelude;

pub mod favorite;
pub mod inquiry;
pub mod property;
pub mod property_amenity;
pub mod sea_orm_active_enums;
pub mod user;
