use entity::sea_orm_active_enums::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct RegisterDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    /// Only `user` and `agent` may be chosen at registration.
    pub role: Option<Role>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordDto {
    pub current_password: String,
    pub new_password: String,
}
