use crate::server::{
    data::user::UserRepository,
    model::{
        pagination::PageRequest,
        user::{CreateUserParam, UpdateUserParam, UserFilter},
    },
};
use entity::sea_orm_active_enums::Role;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod deactivate;
mod get_agents_paginated;
