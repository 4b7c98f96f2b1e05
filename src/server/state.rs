//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler
//! through Axum's state extraction. Every field is cheap to clone.

use std::{path::PathBuf, sync::Arc};

use sea_orm::DatabaseConnection;

use crate::server::service::mailer::Mailer;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Clones share the pool.
    pub db: DatabaseConnection,

    /// Outgoing mail used for inquiry notifications and responses.
    pub mailer: Arc<dyn Mailer>,

    /// Public base URL used to build links to uploaded images.
    pub app_url: String,

    /// Directory uploaded images are written to and served from.
    pub upload_dir: PathBuf,
}

impl AppState {
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `mailer` - Mail delivery for inquiry messages
    /// - `app_url` - Application base URL
    /// - `upload_dir` - Image upload directory
    pub fn new(
        db: DatabaseConnection,
        mailer: Arc<dyn Mailer>,
        app_url: String,
        upload_dir: PathBuf,
    ) -> Self {
        Self {
            db,
            mailer,
            app_url,
            upload_dir,
        }
    }
}
