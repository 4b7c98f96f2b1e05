//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, convert request DTOs into
//! validated parameters, call a service and wrap the result in the response
//! envelope. Each handler carries a `utoipa::path` annotation collected into
//! the OpenAPI document in `router`.

pub mod auth;
pub mod favorite;
pub mod inquiry;
pub mod param;
pub mod property;
pub mod stats;
pub mod upload;
pub mod user;
