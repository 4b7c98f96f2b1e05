use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{LoginParam, RegisterParam, UpdatePasswordParam, User},
    service::auth::AuthService,
    util::password::hash_password,
};
use entity::sea_orm_active_enums::Role;
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod login;
mod update_password;

fn register_param(email: &str) -> RegisterParam {
    RegisterParam {
        name: "Jane Doe".to_string(),
        email: email.to_string(),
        password: "secret123".to_string(),
        phone: None,
        role: Role::User,
    }
}
