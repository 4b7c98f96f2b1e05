//! Database repository layer.
//!
//! Each repository wraps a borrowed `DatabaseConnection` and converts SeaORM
//! entity models into domain models from `server::model` at its boundary, so
//! services never see raw rows.

pub mod favorite;
pub mod inquiry;
pub mod property;
pub mod stats;
pub mod user;

#[cfg(test)]
mod test;
