//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated
//! input from controllers into services.

pub mod favorite;
pub mod inquiry;
pub mod pagination;
pub mod property;
pub mod stats;
pub mod upload;
pub mod user;
