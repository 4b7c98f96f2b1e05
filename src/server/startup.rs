use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{session_store::ExpiredDeletion, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{config::Config, error::AppError};

/// Sessions expire after this long without a request.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Interval between sweeps of expired sessions.
const SESSION_CLEANUP_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60 * 60);

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the configured database URL, then
/// applies every pending SeaORM migration so the schema is current before any
/// request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application database.
///
/// Creates the session table if needed and starts a background task that
/// deletes expired sessions.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer issuing `id` cookies with a 7 day inactivity expiry
/// - `Err(AppError::InternalError)` - Session table could not be created
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    tokio::spawn(
        session_store
            .clone()
            .continuously_delete_expired(SESSION_CLEANUP_INTERVAL),
    );

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            SESSION_INACTIVITY_DAYS,
        ))))
}
