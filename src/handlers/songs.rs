use axum::extract::State;

use crate::api::format::{serialize_all, serialize_song, SongOutput};
use crate::api::validate::{partial_update, require_fields};
use crate::api::{FieldSpec, JsonBody};
use crate::database::models::Song;
use crate::middleware::{ApiResponse, ApiResult, Existing};
use crate::services::SongService;
use crate::types::AppState;

const SONG_FIELDS: &[FieldSpec] = &[FieldSpec::text("song_name"), FieldSpec::integer("album")];

pub async fn song_list(State(state): State<AppState>) -> ApiResult<Vec<SongOutput>> {
    let songs = SongService::new(&state.pool).get_all_songs().await?;
    Ok(ApiResponse::success(serialize_all(&songs, serialize_song)))
}

pub async fn song_create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<SongOutput> {
    let new_song = require_fields(&body, SONG_FIELDS)?;
    let song = SongService::new(&state.pool).insert_song(&new_song).await?;

    tracing::info!("Song with id {} created.", song.song_id);
    Ok(ApiResponse::created(format!("/api/songs/{}", song.song_id), serialize_song(&song)))
}

pub async fn song_get(Existing { record, .. }: Existing<Song>) -> ApiResult<SongOutput> {
    Ok(ApiResponse::success(serialize_song(&record)))
}

pub async fn song_update(
    State(state): State<AppState>,
    Existing { id, .. }: Existing<Song>,
    JsonBody(body): JsonBody,
) -> ApiResult<()> {
    let fields = partial_update(&body, SONG_FIELDS)?;
    SongService::new(&state.pool).update_song(id, &fields).await?;

    tracing::info!("Song with id {} updated.", id);
    Ok(ApiResponse::no_content())
}

pub async fn song_delete(
    State(state): State<AppState>,
    Existing { id, .. }: Existing<Song>,
) -> ApiResult<()> {
    SongService::new(&state.pool).delete_song(id).await?;

    tracing::info!("Song with id {} deleted.", id);
    Ok(ApiResponse::no_content())
}
