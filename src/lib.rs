pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod types;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::middleware::{bearer_auth_middleware, server_error_middleware};
use crate::types::AppState;

/// The full HTTP application: every collection under `/api`, behind the
/// bearer gate.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let api = Router::new()
        .merge(album_routes())
        .merge(artist_routes())
        .merge(song_routes())
        .merge(user_routes())
        .merge(user_album_routes())
        .merge(user_artist_routes());

    let mut router = Router::new()
        .nest("/api", api)
        .layer(from_fn_with_state(state.clone(), server_error_middleware))
        .layer(from_fn_with_state(state.clone(), bearer_auth_middleware));

    if config.security.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

fn album_routes() -> Router<AppState> {
    use handlers::albums;

    Router::new()
        .route("/albums", get(albums::album_list).post(albums::album_create))
        .route(
            "/albums/:id",
            get(albums::album_get)
                .patch(albums::album_update)
                .delete(albums::album_delete),
        )
}

fn artist_routes() -> Router<AppState> {
    use handlers::artists;

    Router::new()
        .route("/artists", get(artists::artist_list).post(artists::artist_create))
        .route(
            "/artists/:id",
            get(artists::artist_get)
                .patch(artists::artist_update)
                .delete(artists::artist_delete),
        )
}

fn song_routes() -> Router<AppState> {
    use handlers::songs;

    Router::new()
        .route("/songs", get(songs::song_list).post(songs::song_create))
        .route(
            "/songs/:id",
            get(songs::song_get).patch(songs::song_update).delete(songs::song_delete),
        )
}

fn user_routes() -> Router<AppState> {
    use handlers::users;

    // Static segments take priority over `/:id` in axum's router
    Router::new()
        .route("/users", get(users::user_list).post(users::user_create))
        .route("/users/login", post(users::user_login))
        .route("/users/usernames", get(users::username_list))
        .route(
            "/users/:id",
            get(users::user_get).patch(users::user_update).delete(users::user_delete),
        )
}

fn user_album_routes() -> Router<AppState> {
    use handlers::users_albums;

    Router::new()
        .route(
            "/usersalbums",
            get(users_albums::user_album_list).post(users_albums::user_album_create),
        )
        .route(
            "/usersalbums/:id",
            get(users_albums::user_album_get).delete(users_albums::user_album_delete),
        )
}

fn user_artist_routes() -> Router<AppState> {
    use handlers::users_artists;

    Router::new()
        .route(
            "/usersartists",
            get(users_artists::user_artist_list).post(users_artists::user_artist_create),
        )
        .route(
            "/usersartists/:id",
            get(users_artists::user_artist_get).delete(users_artists::user_artist_delete),
        )
}
