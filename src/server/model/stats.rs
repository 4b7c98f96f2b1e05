//! Aggregated dashboard figures.

use crate::{
    model::stats::{
        AgentCountsDto, AgentStatsDto, DashboardStatsDto, GroupCountDto, MonthlyCountDto,
        OverviewCountsDto, OverviewStatsDto, PriceStatsDto,
    },
    server::model::{inquiry::Inquiry, property::PropertySummary},
};

/// Number of records sharing one grouping value.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupCount {
    pub key: String,
    pub count: u64,
}

impl GroupCount {
    pub fn into_dto(self) -> GroupCountDto {
        GroupCountDto {
            id: self.key,
            count: self.count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyCount {
    pub year: i32,
    pub month: u32,
    pub count: u64,
}

impl MonthlyCount {
    pub fn into_dto(self) -> MonthlyCountDto {
        MonthlyCountDto {
            year: self.year,
            month: self.month,
            count: self.count,
        }
    }
}

/// Price figures over available listings. All zero when there are none.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceStats {
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewStats {
    pub total_properties: u64,
    pub total_users: u64,
    pub total_agents: u64,
    pub total_inquiries: u64,
    pub new_inquiries: u64,
    pub properties_by_status: Vec<GroupCount>,
    pub properties_by_type: Vec<GroupCount>,
    pub properties_by_listing: Vec<GroupCount>,
    pub recent_properties: Vec<PropertySummary>,
    pub recent_inquiries: Vec<Inquiry>,
    pub monthly_properties: Vec<MonthlyCount>,
    pub monthly_inquiries: Vec<MonthlyCount>,
    pub top_cities: Vec<GroupCount>,
    pub price_stats: PriceStats,
}

impl OverviewStats {
    pub fn into_dto(self) -> OverviewStatsDto {
        OverviewStatsDto {
            counts: OverviewCountsDto {
                total_properties: self.total_properties,
                total_users: self.total_users,
                total_agents: self.total_agents,
                total_inquiries: self.total_inquiries,
                new_inquiries: self.new_inquiries,
            },
            properties_by_status: groups_into_dto(self.properties_by_status),
            properties_by_type: groups_into_dto(self.properties_by_type),
            properties_by_listing: groups_into_dto(self.properties_by_listing),
            recent_properties: summaries_into_dto(self.recent_properties),
            recent_inquiries: inquiries_into_dto(self.recent_inquiries),
            monthly_properties: self
                .monthly_properties
                .into_iter()
                .map(MonthlyCount::into_dto)
                .collect(),
            monthly_inquiries: self
                .monthly_inquiries
                .into_iter()
                .map(MonthlyCount::into_dto)
                .collect(),
            top_cities: groups_into_dto(self.top_cities),
            price_stats: PriceStatsDto {
                avg_price: self.price_stats.avg_price,
                min_price: self.price_stats.min_price,
                max_price: self.price_stats.max_price,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgentStats {
    pub total_properties: u64,
    pub active_listings: u64,
    pub sold_properties: u64,
    pub rented_properties: u64,
    pub total_inquiries: u64,
    pub new_inquiries: u64,
    pub total_views: i64,
    pub properties_by_status: Vec<GroupCount>,
    pub recent_inquiries: Vec<Inquiry>,
    pub top_properties: Vec<PropertySummary>,
}

impl AgentStats {
    pub fn into_dto(self) -> AgentStatsDto {
        AgentStatsDto {
            counts: AgentCountsDto {
                total_properties: self.total_properties,
                active_listings: self.active_listings,
                sold_properties: self.sold_properties,
                rented_properties: self.rented_properties,
                total_inquiries: self.total_inquiries,
                new_inquiries: self.new_inquiries,
                total_views: self.total_views,
            },
            properties_by_status: groups_into_dto(self.properties_by_status),
            recent_inquiries: inquiries_into_dto(self.recent_inquiries),
            top_properties: summaries_into_dto(self.top_properties),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_properties: u64,
    pub total_users: u64,
    pub total_inquiries: u64,
    pub total_views: i64,
    pub recent_properties: Vec<PropertySummary>,
    pub recent_inquiries: Vec<Inquiry>,
}

impl DashboardStats {
    pub fn into_dto(self) -> DashboardStatsDto {
        DashboardStatsDto {
            total_properties: self.total_properties,
            total_users: self.total_users,
            total_inquiries: self.total_inquiries,
            total_views: self.total_views,
            recent_properties: summaries_into_dto(self.recent_properties),
            recent_inquiries: inquiries_into_dto(self.recent_inquiries),
        }
    }
}

fn groups_into_dto(groups: Vec<GroupCount>) -> Vec<GroupCountDto> {
    groups.into_iter().map(GroupCount::into_dto).collect()
}

fn summaries_into_dto(
    summaries: Vec<PropertySummary>,
) -> Vec<crate::model::property::PropertySummaryDto> {
    summaries.into_iter().map(PropertySummary::into_dto).collect()
}

fn inquiries_into_dto(inquiries: Vec<Inquiry>) -> Vec<crate::model::inquiry::InquiryDto> {
    inquiries.into_iter().map(Inquiry::into_dto).collect()
}
