use crate::server::{error::AppError, model::user::User, service::stats::StatsService};
use entity::sea_orm_active_enums::{InquiryStatus, PropertyStatus};
use test_utils::{builder::TestBuilder, factory};

mod overview;
