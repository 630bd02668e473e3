#![allow(dead_code)]

use anyhow::{Context, Result};
use reqwest::{Method, RequestBuilder};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use album_track_api::config::AppConfig;
use album_track_api::database::DatabaseManager;
use album_track_api::types::AppState;

pub const TEST_TOKEN: &str = "test-api-token";

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        user_id SERIAL PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        username TEXT NOT NULL,
        password TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS artists (
        artist_id SERIAL PRIMARY KEY,
        artist_name TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS albums (
        album_id SERIAL PRIMARY KEY,
        album_name TEXT NOT NULL,
        genre TEXT NOT NULL,
        artist INTEGER NOT NULL REFERENCES artists(artist_id) ON DELETE CASCADE
    )",
    "CREATE TABLE IF NOT EXISTS songs (
        song_id SERIAL PRIMARY KEY,
        song_name TEXT NOT NULL,
        album INTEGER NOT NULL REFERENCES albums(album_id) ON DELETE CASCADE
    )",
    "CREATE TABLE IF NOT EXISTS usersalbums (
        usersalbums_id SERIAL PRIMARY KEY,
        user_id INTEGER NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
        album INTEGER NOT NULL REFERENCES albums(album_id) ON DELETE CASCADE
    )",
    "CREATE TABLE IF NOT EXISTS usersartists (
        usersartists_id SERIAL PRIMARY KEY,
        user_id INTEGER NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
        artist INTEGER NOT NULL REFERENCES artists(artist_id) ON DELETE CASCADE
    )",
];

/// An in-process server on a free port
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn start(pool: PgPool) -> Result<Self> {
        Self::start_with(pool, AppConfig::test()).await
    }

    /// Serve with the given configuration; the bearer token is always `TEST_TOKEN`
    pub async fn start_with(pool: PgPool, mut config: AppConfig) -> Result<Self> {
        config.security.api_token = Some(TEST_TOKEN.to_string());

        let app = album_track_api::app(AppState::from_config(pool, &config), &config);

        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test listener")?;

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://127.0.0.1:{}", port),
            client: reqwest::Client::new(),
        })
    }

    /// Request carrying the shared bearer token
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.anonymous(method, path).bearer_auth(TEST_TOKEN)
    }

    /// Request without an Authorization header
    pub fn anonymous(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, format!("{}{}", self.base_url, path))
    }
}

/// A pool that never connects unless a query runs; enough for requests
/// that are rejected before the database is touched.
pub fn lazy_pool() -> Result<PgPool> {
    let mut config = AppConfig::test();
    config.database.connection_timeout = 1;
    Ok(DatabaseManager::connect_lazy(&config)?)
}

/// A pool whose every query fails: nothing listens on the port.
pub fn unreachable_pool() -> Result<PgPool> {
    let mut config = AppConfig::test();
    config.database.url = "postgresql://127.0.0.1:1/unreachable".to_string();
    config.database.connection_timeout = 1;
    Ok(DatabaseManager::connect_lazy(&config)?)
}

/// Pool on `TEST_DATABASE_URL` with the fixture schema in place and every
/// table empty. `None` when the variable is unset.
pub async fn database_pool() -> Result<Option<PgPool>> {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return Ok(None);
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .context("failed to connect to TEST_DATABASE_URL")?;

    for statement in SCHEMA {
        sqlx::query(statement).execute(&pool).await?;
    }
    sqlx::query(
        "TRUNCATE users, artists, albums, songs, usersalbums, usersartists \
         RESTART IDENTITY CASCADE",
    )
    .execute(&pool)
    .await?;

    Ok(Some(pool))
}

/// Skip the current test when no test database is configured
macro_rules! require_db {
    () => {
        match common::database_pool().await? {
            Some(pool) => pool,
            None => return Ok(()),
        }
    };
}

pub async fn seed_artists(pool: &PgPool, names: &[&str]) -> Result<()> {
    for name in names {
        sqlx::query("INSERT INTO artists (artist_name) VALUES ($1)")
            .bind(name)
            .execute(pool)
            .await?;
    }
    Ok(())
}

pub async fn seed_albums(pool: &PgPool, albums: &[(&str, &str, i32)]) -> Result<()> {
    for (album_name, genre, artist) in albums {
        sqlx::query("INSERT INTO albums (album_name, genre, artist) VALUES ($1, $2, $3)")
            .bind(album_name)
            .bind(genre)
            .bind(artist)
            .execute(pool)
            .await?;
    }
    Ok(())
}

pub async fn seed_songs(pool: &PgPool, songs: &[(&str, i32)]) -> Result<()> {
    for (song_name, album) in songs {
        sqlx::query("INSERT INTO songs (song_name, album) VALUES ($1, $2)")
            .bind(song_name)
            .bind(album)
            .execute(pool)
            .await?;
    }
    Ok(())
}

/// (first_name, last_name, username, password)
pub async fn seed_users(pool: &PgPool, users: &[(&str, &str, &str, &str)]) -> Result<()> {
    for (first_name, last_name, username, password) in users {
        sqlx::query(
            "INSERT INTO users (first_name, last_name, username, password) VALUES ($1, $2, $3, $4)",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(username)
        .bind(password)
        .execute(pool)
        .await?;
    }
    Ok(())
}

pub async fn seed_users_albums(pool: &PgPool, links: &[(i32, i32)]) -> Result<()> {
    for (user_id, album) in links {
        sqlx::query("INSERT INTO usersalbums (user_id, album) VALUES ($1, $2)")
            .bind(user_id)
            .bind(album)
            .execute(pool)
            .await?;
    }
    Ok(())
}

pub async fn seed_users_artists(pool: &PgPool, links: &[(i32, i32)]) -> Result<()> {
    for (user_id, artist) in links {
        sqlx::query("INSERT INTO usersartists (user_id, artist) VALUES ($1, $2)")
            .bind(user_id)
            .bind(artist)
            .execute(pool)
            .await?;
    }
    Ok(())
}

/// Artists, albums and users shared by most database tests
pub async fn seed_library(pool: &PgPool) -> Result<()> {
    seed_artists(pool, &["Lorde", "Ariana Grande", "Phoebe Bridgers"]).await?;
    seed_albums(
        pool,
        &[
            ("My Album", "Pop", 1),
            ("My 2nd Album", "Pop", 1),
            ("Woooo", "Pop", 2),
            ("Hi", "Pop", 2),
        ],
    )
    .await?;
    seed_users(
        pool,
        &[
            ("Sam", "Smith", "sam.smith", "password1"),
            ("Alex", "Taylor", "alex.taylor", "password2"),
        ],
    )
    .await
}
