use crate::server::{
    error::{auth::AuthError, AppError},
    model::{pagination::PageRequest, user::{UpdateUserParam, User}},
    service::user::UserService,
};
use test_utils::{builder::TestBuilder, factory};

mod agents;
mod update;
