//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce
//! existence and ownership rules, coordinate several repositories where an
//! operation spans tables, and work purely with domain models from
//! `server::model`.

pub mod auth;
pub mod favorite;
pub mod inquiry;
pub mod mailer;
pub mod property;
pub mod stats;
pub mod upload;
pub mod user;
