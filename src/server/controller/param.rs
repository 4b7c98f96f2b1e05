//! Query string parameters shared by the controllers.
//!
//! Each struct mirrors the accepted query keys in camelCase and converts into
//! the filter, sort and page types the services expect.

use entity::sea_orm_active_enums::{
    InquiryStatus, ListingType, PropertyStatus, PropertyType, Role,
};
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use utoipa::IntoParams;

use crate::server::{
    error::AppError,
    model::{
        inquiry::InquiryFilter,
        pagination::PageRequest,
        property::{PropertyFilter, PropertySort},
        user::UserFilter,
    },
    util::parse::parse_amenity_list,
};

pub const DEFAULT_PROPERTY_LIMIT: u64 = 12;
pub const DEFAULT_FEATURED_LIMIT: u64 = 6;
pub const DEFAULT_SIMILAR_LIMIT: u64 = 4;
pub const DEFAULT_USER_LIMIT: u64 = 10;
pub const DEFAULT_INQUIRY_LIMIT: u64 = 10;
pub const DEFAULT_FAVORITE_LIMIT: u64 = 12;

/// Parses a numeric query value, treating anything unparsable as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse().ok()))
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Page number, starting at 1
    #[serde(default, deserialize_with = "lenient")]
    pub page: Option<u64>,
    /// Items per page, at most 100
    #[serde(default, deserialize_with = "lenient")]
    pub limit: Option<u64>,
}

impl PageParams {
    pub fn request(&self, default_limit: u64) -> PageRequest {
        PageRequest::new(self.page, self.limit, default_limit)
    }
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct LimitParams {
    #[serde(default, deserialize_with = "lenient")]
    pub limit: Option<u64>,
}

impl LimitParams {
    pub fn limit(&self, default_limit: u64) -> u64 {
        PageRequest::new(None, self.limit, default_limit).limit
    }
}

/// Public listing search.
#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct PropertyQuery {
    #[serde(default, deserialize_with = "lenient")]
    pub page: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub limit: Option<u64>,
    pub property_type: Option<PropertyType>,
    pub listing_type: Option<ListingType>,
    pub status: Option<PropertyStatus>,
    /// Case-insensitive substring of the city
    pub city: Option<String>,
    /// Case-insensitive substring of the state
    pub state: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Minimum bedrooms
    pub bedrooms: Option<i32>,
    /// Minimum bathrooms
    pub bathrooms: Option<i32>,
    pub min_area: Option<f64>,
    pub max_area: Option<f64>,
    /// Comma separated amenities the listing must all have
    pub amenities: Option<String>,
    /// Only `true` filters; any other value is ignored
    pub featured: Option<String>,
    /// Agent id
    pub agent: Option<i32>,
    /// Substring of title, description or city
    pub search: Option<String>,
    /// One of price-asc, price-desc, newest, oldest, popular
    pub sort: Option<String>,
}

impl PropertyQuery {
    /// Builds the active-listing filter, sort order and page.
    ///
    /// # Returns
    /// - `Ok(..)` - Filter over active listings, sort and page request
    /// - `Err(AppError::BadRequest)` - The amenity list names an unknown amenity
    pub fn into_parts(self) -> Result<(PropertyFilter, PropertySort, PageRequest), AppError> {
        let amenities = match self.amenities.as_deref() {
            Some(list) => parse_amenity_list(list)?,
            None => Vec::new(),
        };

        let filter = PropertyFilter {
            property_type: self.property_type,
            listing_type: self.listing_type,
            status: self.status,
            city: self.city,
            state: self.state,
            min_price: self.min_price,
            max_price: self.max_price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            min_area: self.min_area,
            max_area: self.max_area,
            amenities,
            featured: (self.featured.as_deref() == Some("true")).then_some(true),
            agent_id: self.agent,
            search: self.search,
            ..PropertyFilter::active()
        };

        Ok((
            filter,
            PropertySort::parse(self.sort.as_deref()),
            PageRequest::new(self.page, self.limit, DEFAULT_PROPERTY_LIMIT),
        ))
    }
}

/// The caller's own listings.
#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct MyPropertiesQuery {
    #[serde(default, deserialize_with = "lenient")]
    pub page: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub limit: Option<u64>,
    pub status: Option<PropertyStatus>,
    pub is_active: Option<bool>,
}

/// Admin user listing.
#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    #[serde(default, deserialize_with = "lenient")]
    pub page: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub limit: Option<u64>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    /// Substring of name or email
    pub search: Option<String>,
}

impl UserQuery {
    pub fn into_parts(self) -> (UserFilter, PageRequest) {
        (
            UserFilter {
                role: self.role,
                is_active: self.is_active,
                search: self.search,
            },
            PageRequest::new(self.page, self.limit, DEFAULT_USER_LIMIT),
        )
    }
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct AgentQuery {
    #[serde(default, deserialize_with = "lenient")]
    pub page: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub limit: Option<u64>,
    /// Substring of the agent's name
    pub search: Option<String>,
}

/// Inquiry listing, for admins.
#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct InquiryQuery {
    #[serde(default, deserialize_with = "lenient")]
    pub page: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub limit: Option<u64>,
    pub status: Option<InquiryStatus>,
    /// Listing id
    pub property: Option<i32>,
}

impl InquiryQuery {
    pub fn into_parts(self) -> (InquiryFilter, PageRequest) {
        (
            InquiryFilter {
                status: self.status,
                property_id: self.property,
                property_ids: None,
            },
            PageRequest::new(self.page, self.limit, DEFAULT_INQUIRY_LIMIT),
        )
    }
}

/// Inquiries on the caller's listings.
#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct MyInquiriesQuery {
    #[serde(default, deserialize_with = "lenient")]
    pub page: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub limit: Option<u64>,
    pub status: Option<InquiryStatus>,
}
