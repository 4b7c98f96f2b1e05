pub use super::favorite::Entity as Favorite;
pub use super::inquiry::Entity as Inquiry;
pub use super::property::Entity as Property;
pub use super::property_amenity::Entity as PropertyAmenity;
pub use super::user::Entity as User;
