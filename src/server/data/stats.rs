//! Aggregate queries backing the dashboard statistics.

use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

use crate::server::{
    data::{inquiry, property},
    model::{
        inquiry::InquiryFilter,
        property::PropertyFilter,
        stats::{GroupCount, PriceStats},
    },
};

pub struct StatsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts listings matching `filter` grouped by the value of `column`.
    ///
    /// Groups come back in database order; callers sort when order matters.
    pub async fn count_properties_by(
        &self,
        column: entity::property::Column,
        filter: &PropertyFilter,
    ) -> Result<Vec<GroupCount>, DbErr> {
        let rows: Vec<(String, i64)> = entity::prelude::Property::find()
            .select_only()
            .column(column)
            .column_as(entity::property::Column::Id.count(), "count")
            .filter(property::filter_condition(filter))
            .group_by(column)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(key, count)| GroupCount {
                key,
                count: count.max(0) as u64,
            })
            .collect())
    }

    /// Sum of view counters over listings matching `filter`.
    pub async fn total_views(&self, filter: &PropertyFilter) -> Result<i64, DbErr> {
        let total: Option<Option<i64>> = entity::prelude::Property::find()
            .select_only()
            .column_as(entity::property::Column::Views.sum(), "total")
            .filter(property::filter_condition(filter))
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0))
    }

    /// Average, minimum and maximum price over listings matching `filter`.
    pub async fn price_stats(&self, filter: &PropertyFilter) -> Result<PriceStats, DbErr> {
        let row: Option<(Option<f64>, Option<f64>, Option<f64>, i64)> =
            entity::prelude::Property::find()
                .select_only()
                .column_as(entity::property::Column::Price.sum(), "sum")
                .column_as(entity::property::Column::Price.min(), "min")
                .column_as(entity::property::Column::Price.max(), "max")
                .column_as(entity::property::Column::Id.count(), "count")
                .filter(property::filter_condition(filter))
                .into_tuple()
                .one(self.db)
                .await?;

        let Some((Some(sum), Some(min), Some(max), count)) = row else {
            return Ok(PriceStats::default());
        };
        if count <= 0 {
            return Ok(PriceStats::default());
        }

        Ok(PriceStats {
            avg_price: sum / count as f64,
            min_price: min,
            max_price: max,
        })
    }

    /// Creation timestamps of listings created at or after `since`.
    ///
    /// # Arguments
    /// - `since` - Lower bound, inclusive
    /// - `agent_id` - Restrict to one agent's listings
    pub async fn property_created_since(
        &self,
        since: DateTime<Utc>,
        agent_id: Option<i32>,
    ) -> Result<Vec<DateTime<Utc>>, DbErr> {
        let mut query = entity::prelude::Property::find()
            .select_only()
            .column(entity::property::Column::CreatedAt)
            .filter(entity::property::Column::CreatedAt.gte(since));

        if let Some(agent_id) = agent_id {
            query = query.filter(entity::property::Column::AgentId.eq(agent_id));
        }

        query.into_tuple().all(self.db).await
    }

    /// Creation timestamps of inquiries matching `filter` created at or after `since`.
    pub async fn inquiry_created_since(
        &self,
        since: DateTime<Utc>,
        filter: &InquiryFilter,
    ) -> Result<Vec<DateTime<Utc>>, DbErr> {
        entity::prelude::Inquiry::find()
            .select_only()
            .column(entity::inquiry::Column::CreatedAt)
            .filter(inquiry::filter_condition(filter))
            .filter(entity::inquiry::Column::CreatedAt.gte(since))
            .into_tuple()
            .all(self.db)
            .await
    }
}
