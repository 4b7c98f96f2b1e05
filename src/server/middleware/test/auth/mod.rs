use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
};
use entity::sea_orm_active_enums::Role;
use test_utils::{builder::TestBuilder, factory};

mod require;
