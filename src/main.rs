use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use album_track_api::config::config;
use album_track_api::database::DatabaseManager;
use album_track_api::types::AppState;

/// Music library REST API
#[derive(Debug, Parser)]
#[command(name = "album-track-api", version, about)]
struct Args {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so DATABASE_URL and API_TOKEN can live there
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = config();
    tracing::info!("Starting album-track-api in {:?} mode", config.environment);

    if config.security.api_token.is_none() {
        tracing::warn!("API_TOKEN is not set; every request will be rejected");
    }

    let pool = DatabaseManager::connect(config)
        .await
        .context("failed to connect to the database")?;
    DatabaseManager::health_check(&pool)
        .await
        .context("database health check failed")?;

    let app = album_track_api::app(AppState::from_config(pool, config), config);

    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let bind_addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Listening on http://{}", bind_addr);
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
