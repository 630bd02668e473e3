use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;
use tracing::info;

use crate::config::AppConfig;

/// Errors from the data layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Builds the connection pool shared by every request
pub struct DatabaseManager;

impl DatabaseManager {
    /// Connect eagerly using the configured URL and pool limits
    pub async fn connect(config: &AppConfig) -> Result<PgPool, DatabaseError> {
        let url = config.database_url();
        let pool = Self::pool_options(config).connect(url).await?;

        info!("Connected to database {}", Self::redacted(url)?);
        Ok(pool)
    }

    /// Build a pool that opens connections on first use
    pub fn connect_lazy(config: &AppConfig) -> Result<PgPool, DatabaseError> {
        let url = config.database_url();
        let pool = Self::pool_options(config).connect_lazy(url)?;

        info!("Created lazy database pool for {}", Self::redacted(url)?);
        Ok(pool)
    }

    fn pool_options(config: &AppConfig) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .acquire_timeout(Duration::from_secs(config.database.connection_timeout))
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    /// Host and database name of a connection string, without credentials
    pub fn redacted(database_url: &str) -> Result<String, DatabaseError> {
        let url = url::Url::parse(database_url).map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        let host = url.host_str().unwrap_or("localhost");
        let port = url.port().map(|p| format!(":{}", p)).unwrap_or_default();
        Ok(format!("{}{}{}", host, port, url.path()))
    }

    /// Quote SQL identifier to prevent injection
    pub fn quote_identifier(name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\"\""))
    }
}
