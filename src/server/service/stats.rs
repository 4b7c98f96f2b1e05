//! Dashboard aggregates.
//!
//! Grouped counts are sorted by count, largest first, with ties broken by key
//! so responses are stable.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Months, Utc};
use entity::sea_orm_active_enums::{InquiryStatus, PropertyStatus, Role};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        inquiry::InquiryRepository, property::PropertyRepository, stats::StatsRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        inquiry::InquiryFilter,
        property::{PropertyFilter, PropertySort},
        stats::{AgentStats, DashboardStats, GroupCount, MonthlyCount, OverviewStats},
        user::User,
    },
};

/// Number of entries in each "recent" and "top" list.
const RECENT_LIMIT: u64 = 5;

/// How far back the monthly creation counts reach.
const MONTHLY_WINDOW: Months = Months::new(6);

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Site-wide figures for administrators.
    pub async fn overview(&self) -> Result<OverviewStats, AppError> {
        let property_repo = PropertyRepository::new(self.db);
        let inquiry_repo = InquiryRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);
        let stats_repo = StatsRepository::new(self.db);

        let active = PropertyFilter::active();
        let all_inquiries = InquiryFilter::default();
        let new_inquiries = InquiryFilter {
            status: Some(InquiryStatus::New),
            ..Default::default()
        };

        let now = Utc::now();
        let since = now.checked_sub_months(MONTHLY_WINDOW).unwrap_or(now);

        let mut top_cities = sorted_groups(
            stats_repo
                .count_properties_by(entity::property::Column::AddressCity, &active)
                .await?,
        );
        top_cities.truncate(RECENT_LIMIT as usize);

        Ok(OverviewStats {
            total_properties: property_repo.count(&active).await?,
            total_users: user_repo.count_active(None).await?,
            total_agents: user_repo
                .count_active(Some(&[Role::Agent, Role::Admin][..]))
                .await?,
            total_inquiries: inquiry_repo.count(&all_inquiries).await?,
            new_inquiries: inquiry_repo.count(&new_inquiries).await?,
            properties_by_status: sorted_groups(
                stats_repo
                    .count_properties_by(entity::property::Column::Status, &active)
                    .await?,
            ),
            properties_by_type: sorted_groups(
                stats_repo
                    .count_properties_by(entity::property::Column::PropertyType, &active)
                    .await?,
            ),
            properties_by_listing: sorted_groups(
                stats_repo
                    .count_properties_by(entity::property::Column::ListingType, &active)
                    .await?,
            ),
            recent_properties: property_repo
                .get_summaries(&active, PropertySort::Newest, RECENT_LIMIT)
                .await?,
            recent_inquiries: inquiry_repo.recent(&all_inquiries, RECENT_LIMIT).await?,
            monthly_properties: monthly_counts(
                stats_repo.property_created_since(since, None).await?,
            ),
            monthly_inquiries: monthly_counts(
                stats_repo
                    .inquiry_created_since(since, &all_inquiries)
                    .await?,
            ),
            top_cities,
            price_stats: stats_repo
                .price_stats(&PropertyFilter {
                    status: Some(PropertyStatus::Available),
                    ..PropertyFilter::active()
                })
                .await?,
        })
    }

    /// Figures for the listings owned by `agent`.
    pub async fn agent(&self, agent: &User) -> Result<AgentStats, AppError> {
        let property_repo = PropertyRepository::new(self.db);
        let inquiry_repo = InquiryRepository::new(self.db);
        let stats_repo = StatsRepository::new(self.db);

        let owned = PropertyFilter {
            agent_id: Some(agent.id),
            ..Default::default()
        };
        let active = PropertyFilter {
            is_active: Some(true),
            ..owned.clone()
        };
        let with_status = |status| PropertyFilter {
            status: Some(status),
            ..owned.clone()
        };

        let inquiries = InquiryFilter {
            property_ids: Some(property_repo.ids_by_agent(agent.id).await?),
            ..Default::default()
        };
        let new_inquiries = InquiryFilter {
            status: Some(InquiryStatus::New),
            ..inquiries.clone()
        };

        Ok(AgentStats {
            total_properties: property_repo.count(&active).await?,
            active_listings: property_repo
                .count(&PropertyFilter {
                    status: Some(PropertyStatus::Available),
                    ..active.clone()
                })
                .await?,
            sold_properties: property_repo
                .count(&with_status(PropertyStatus::Sold))
                .await?,
            rented_properties: property_repo
                .count(&with_status(PropertyStatus::Rented))
                .await?,
            total_inquiries: inquiry_repo.count(&inquiries).await?,
            new_inquiries: inquiry_repo.count(&new_inquiries).await?,
            total_views: stats_repo.total_views(&owned).await?,
            properties_by_status: sorted_groups(
                stats_repo
                    .count_properties_by(entity::property::Column::Status, &active)
                    .await?,
            ),
            recent_inquiries: inquiry_repo.recent(&inquiries, RECENT_LIMIT).await?,
            top_properties: property_repo
                .get_summaries(&active, PropertySort::Popular, RECENT_LIMIT)
                .await?,
        })
    }

    /// Dashboard summary covering everything for admins and the caller's own
    /// listings for agents.
    pub async fn dashboard(&self, actor: &User) -> Result<DashboardStats, AppError> {
        let property_repo = PropertyRepository::new(self.db);
        let inquiry_repo = InquiryRepository::new(self.db);
        let stats_repo = StatsRepository::new(self.db);

        let is_admin = actor.is_admin();

        let scope = PropertyFilter {
            agent_id: (!is_admin).then_some(actor.id),
            ..Default::default()
        };
        let active = PropertyFilter {
            is_active: Some(true),
            ..scope.clone()
        };
        let inquiries = if is_admin {
            InquiryFilter::default()
        } else {
            InquiryFilter {
                property_ids: Some(property_repo.ids_by_agent(actor.id).await?),
                ..Default::default()
            }
        };

        let total_users = if is_admin {
            UserRepository::new(self.db).count_active(None).await?
        } else {
            0
        };

        Ok(DashboardStats {
            total_properties: property_repo.count(&active).await?,
            total_users,
            total_inquiries: inquiry_repo.count(&inquiries).await?,
            total_views: stats_repo.total_views(&scope).await?,
            recent_properties: property_repo
                .get_summaries(&active, PropertySort::Newest, RECENT_LIMIT)
                .await?,
            recent_inquiries: inquiry_repo.recent(&inquiries, RECENT_LIMIT).await?,
        })
    }
}

/// Buckets timestamps by calendar month (UTC), oldest month first.
///
/// Months without any record are omitted.
pub fn monthly_counts(dates: Vec<DateTime<Utc>>) -> Vec<MonthlyCount> {
    let mut buckets: BTreeMap<(i32, u32), u64> = BTreeMap::new();
    for date in dates {
        *buckets.entry((date.year(), date.month())).or_default() += 1;
    }

    buckets
        .into_iter()
        .map(|((year, month), count)| MonthlyCount { year, month, count })
        .collect()
}

fn sorted_groups(mut groups: Vec<GroupCount>) -> Vec<GroupCount> {
    groups.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    groups
}
