//! Shared types used across the codebase

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::{AppConfig, Environment};

/// State handed to every handler and middleware
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Shared bearer secret; `None` means no request can authenticate
    pub api_token: Option<Arc<str>>,
    /// Decides whether 500 responses carry the underlying error
    pub environment: Environment,
}

impl AppState {
    pub fn new(pool: PgPool, api_token: Option<&str>, environment: Environment) -> Self {
        Self {
            pool,
            api_token: api_token.map(Arc::from),
            environment,
        }
    }

    pub fn from_config(pool: PgPool, config: &AppConfig) -> Self {
        Self::new(pool, config.security.api_token.as_deref(), config.environment)
    }
}
