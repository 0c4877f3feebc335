//! PostgreSQL connection pool construction.

use std::str::FromStr;
use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

use crate::config::Config;

/// Builds the process-wide connection pool from configuration.
///
/// Connections are checked out per statement and returned on drop, so no
/// request holds one across calls.
///
/// # Errors
///
/// Returns an error if the URL or SSL mode cannot be parsed, or if the first
/// connection cannot be established.
pub async fn connect_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    let ssl_mode = PgSslMode::from_str(&config.db_ssl_mode)?;
    let options = PgConnectOptions::from_str(&config.database_url)?.ssl_mode(ssl_mode);

    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Some(Duration::from_secs(config.db_idle_timeout)))
        .max_lifetime(Some(Duration::from_secs(config.db_max_lifetime)))
        .connect_with(options)
        .await
}
