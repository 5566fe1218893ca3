pub mod client;
pub mod flight;

use crate::error::{ConfigError, InitializationError};
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::Deserialize;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Pool, Postgres};
use std::str::FromStr;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

pub const ENV_VAR_PREFIX: &str = "FLIGHTS__";
pub const SETTINGS_FILE: &str = "Settings.toml";

/// Ascending indexes on the `flights` table, as (index name, column).
const FLIGHT_INDEXES: &[(&str, &str)] = &[
    ("flights_origin_idx", "origin"),
    ("flights_destination_idx", "destination"),
    ("flights_age_idx", "age"),
];

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub postgres: PostgresConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PostgresConfig {
    pub connection_string: String,
    pub database: String,
    pub max_connections: u32,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            connection_string: "postgres://localhost:5432".to_string(),
            database: "flights".to_string(),
            max_connections: 5,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub listen_addr: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the flights API, without a trailing slash.
    pub base_url: String,
    pub log_file: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            log_file: "flights.log".to_string(),
        }
    }
}

pub fn load_config() -> Result<Config, ConfigError> {
    Ok(Figment::new()
        .merge(Toml::file(SETTINGS_FILE))
        .merge(Env::prefixed(ENV_VAR_PREFIX).split("__"))
        .extract::<Config>()?)
}

pub mod error {
    use thiserror::Error;
    use tracing::dispatcher::SetGlobalDefaultError;

    #[derive(Debug, Error)]
    pub enum ConfigError {
        #[error("failed to load configuration: {0}")]
        Figment(#[from] figment::Error),
    }

    #[derive(Debug, Error)]
    pub enum InitializationError {
        #[error(transparent)]
        Tracing(#[from] SetGlobalDefaultError),
        #[error(transparent)]
        Config(#[from] ConfigError),
        #[error(transparent)]
        Migration(#[from] sqlx::migrate::MigrateError),
        #[error(transparent)]
        Db(#[from] sqlx::Error),
        #[error("failed to open log file {path}: {source}")]
        LogFile {
            path: String,
            source: std::io::Error,
        },
    }
}

/// Connects the pool, applies migrations and makes sure the lookup indexes exist.
#[instrument(skip_all, fields(database = %pg_config.database))]
pub async fn initialize_db(pg_config: &PostgresConfig) -> Result<Pool<Postgres>, InitializationError> {
    let options =
        PgConnectOptions::from_str(&pg_config.connection_string)?.database(&pg_config.database);
    let pool = PgPoolOptions::new()
        .max_connections(pg_config.max_connections)
        .connect_with(options)
        .await?;

    info!(name: "db.connected", "db pool created and connected");

    sqlx::migrate!("./migrations").run(&pool).await?;
    ensure_indexes(&pool).await?;

    Ok(pool)
}

/// Creates the ascending indexes on origin, destination and age. Safe to run on every startup.
pub async fn ensure_indexes(pool: &Pool<Postgres>) -> Result<(), sqlx::Error> {
    for (name, column) in FLIGHT_INDEXES {
        let statement = format!("CREATE INDEX IF NOT EXISTS {name} ON flights ({column} ASC)");
        sqlx::query(&statement).execute(pool).await?;
    }
    info!(name: "db.indexes.ready", count = FLIGHT_INDEXES.len(), "flight indexes ensured");
    Ok(())
}

/// Compact console subscriber filtered by `RUST_LOG`, falling back to `info`.
pub fn init_tracing() -> Result<(), InitializationError> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_env_filter(default_env_filter())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

pub fn default_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

pub async fn shutdown_listener(token: Option<CancellationToken>) {
    let ctrl_c = signal::ctrl_c();
    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = ?e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!(name: "signal.ctrlc.received", "received Ctrl+C signal, shutting down"),
        _ = terminate => info!(name: "signal.sigterm.received", "received SIGTERM signal, shutting down"),
    }

    if let Some(token) = token {
        token.cancel();
    }
}
