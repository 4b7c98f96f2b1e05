mod model;
mod server;

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, seed, service::mailer::LogMailer, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    if config.seed_database {
        seed::seed_demo_data(&db).await?;
    }

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let state = AppState::new(
        db,
        Arc::new(LogMailer),
        config.app_url.clone(),
        config.upload_dir.clone(),
    );

    let app = router::router(&config.upload_dir)
        .with_state(state)
        .layer(session)
        .layer(cors_layer(&config)?)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Allows credentialed requests from the configured frontend origin.
///
/// Without `FRONTEND_URL` no cross-origin requests are allowed.
fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let Some(frontend_url) = &config.frontend_url else {
        return Ok(CorsLayer::new());
    };

    let origin = HeaderValue::from_str(frontend_url.trim_end_matches('/'))
        .map_err(|e| AppError::InternalError(format!("Invalid FRONTEND_URL header: {}", e)))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down");
}
