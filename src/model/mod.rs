//! Wire DTOs shared by every API endpoint.
//!
//! All types serialize to camelCase JSON and derive `ToSchema` for the OpenAPI document.

pub mod api;
pub mod auth;
pub mod favorite;
pub mod inquiry;
pub mod property;
pub mod stats;
pub mod upload;
pub mod user;
