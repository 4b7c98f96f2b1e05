use crate::server::{
    data::stats::StatsRepository,
    model::{inquiry::InquiryFilter, property::PropertyFilter},
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{PropertyStatus, PropertyType};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod created_since;
mod price_stats;
