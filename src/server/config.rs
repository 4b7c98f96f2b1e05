use std::{net::SocketAddr, path::PathBuf};

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_URL: &str = "http://localhost:5000";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_UPLOAD_DIR: &str = "uploads";

pub struct Config {
    pub database_url: String,

    /// Public base URL, used to build links to uploaded images.
    pub app_url: String,
    pub bind_addr: SocketAddr,
    pub upload_dir: PathBuf,

    /// Origin allowed to make credentialed cross-origin requests.
    pub frontend_url: Option<String>,
    /// Seed demo data into an empty database on startup.
    pub seed_database: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let app_url = optional_var("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string());
        parse_url("APP_URL", &app_url)?;

        let bind_addr = optional_var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDR".to_string(),
                value: bind_addr.clone(),
                reason: e.to_string(),
            })?;

        let frontend_url = optional_var("FRONTEND_URL");
        if let Some(frontend_url) = &frontend_url {
            parse_url("FRONTEND_URL", frontend_url)?;
        }

        let seed_database = match optional_var("SEED_DATABASE") {
            Some(value) => parse_bool("SEED_DATABASE", &value)?,
            None => false,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_url,
            bind_addr,
            upload_dir: optional_var("UPLOAD_DIR")
                .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string())
                .into(),
            frontend_url,
            seed_database,
        })
    }
}

/// Reads a variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_url(name: &str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}
