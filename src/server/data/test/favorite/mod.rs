use crate::server::{data::favorite::FavoriteRepository, model::pagination::PageRequest};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
