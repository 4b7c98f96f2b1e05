//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*`
//! shorthand for quick default creation. Factories never create their
//! dependencies implicitly: insert the agent before the listing, the listing
//! before its inquiries.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let agent = factory::user::create_agent(&db).await?;
//! let property = factory::property::PropertyFactory::new(&db, agent.id)
//!     .city("Austin")
//!     .price(450_000.0)
//!     .build()
//!     .await?;
//! let inquiry = factory::inquiry::create_inquiry(&db, property.id).await?;
//! ```

pub mod favorite;
pub mod helpers;
pub mod inquiry;
pub mod property;
pub mod user;

pub use favorite::create_favorite;
pub use inquiry::create_inquiry;
pub use property::create_property;
pub use user::{create_admin, create_agent, create_user};
