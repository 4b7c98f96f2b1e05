//! Realestate Test Utils
//!
//! Shared testing utilities for the listing service. Provides a builder for in-memory
//! SQLite test contexts and factories that insert users, listings, inquiries and
//! favorites with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder that registers the entity tables a test needs
//! - **TestContext**: In-memory database connection plus an optional session
//! - **TestError**: Errors raised while preparing the test environment
//! - **factory**: Builders and `create_*` shorthands for every entity
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_properties() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_all_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let agent = factory::user::create_agent(db).await?;
//!     let property = factory::property::create_property(db, agent.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
