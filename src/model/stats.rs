use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{inquiry::InquiryDto, property::PropertySummaryDto};

/// Number of records sharing one grouping value (a status, a type, a city).
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct GroupCountDto {
    pub id: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct MonthlyCountDto {
    pub year: i32,
    pub month: u32,
    pub count: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceStatsDto {
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OverviewCountsDto {
    pub total_properties: u64,
    pub total_users: u64,
    pub total_agents: u64,
    pub total_inquiries: u64,
    pub new_inquiries: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStatsDto {
    pub counts: OverviewCountsDto,
    pub properties_by_status: Vec<GroupCountDto>,
    pub properties_by_type: Vec<GroupCountDto>,
    pub properties_by_listing: Vec<GroupCountDto>,
    pub recent_properties: Vec<PropertySummaryDto>,
    pub recent_inquiries: Vec<InquiryDto>,
    pub monthly_properties: Vec<MonthlyCountDto>,
    pub monthly_inquiries: Vec<MonthlyCountDto>,
    pub top_cities: Vec<GroupCountDto>,
    pub price_stats: PriceStatsDto,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AgentCountsDto {
    pub total_properties: u64,
    pub active_listings: u64,
    pub sold_properties: u64,
    pub rented_properties: u64,
    pub total_inquiries: u64,
    pub new_inquiries: u64,
    pub total_views: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AgentStatsDto {
    pub counts: AgentCountsDto,
    pub properties_by_status: Vec<GroupCountDto>,
    pub recent_inquiries: Vec<InquiryDto>,
    pub top_properties: Vec<PropertySummaryDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_properties: u64,
    pub total_users: u64,
    pub total_inquiries: u64,
    pub total_views: i64,
    pub recent_properties: Vec<PropertySummaryDto>,
    pub recent_inquiries: Vec<InquiryDto>,
}
