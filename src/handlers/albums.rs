use axum::extract::State;

use crate::api::format::{serialize_album, serialize_all, AlbumOutput};
use crate::api::validate::{partial_update, require_fields};
use crate::api::{FieldSpec, JsonBody};
use crate::database::models::Album;
use crate::middleware::{ApiResponse, ApiResult, Existing};
use crate::services::AlbumService;
use crate::types::AppState;

const ALBUM_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("album_name"),
    FieldSpec::text("genre"),
    FieldSpec::integer("artist"),
];

/// GET /api/albums - list albums
pub async fn album_list(State(state): State<AppState>) -> ApiResult<Vec<AlbumOutput>> {
    let albums = AlbumService::new(&state.pool).get_all_albums().await?;
    Ok(ApiResponse::success(serialize_all(&albums, serialize_album)))
}

/// POST /api/albums - create album
pub async fn album_create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<AlbumOutput> {
    let new_album = require_fields(&body, ALBUM_FIELDS)?;
    let album = AlbumService::new(&state.pool).insert_album(&new_album).await?;

    tracing::info!("Album with id {} created.", album.album_id);
    Ok(ApiResponse::created(
        format!("/api/albums/{}", album.album_id),
        serialize_album(&album),
    ))
}

/// GET /api/albums/:id - show album
pub async fn album_get(Existing { record, .. }: Existing<Album>) -> ApiResult<AlbumOutput> {
    Ok(ApiResponse::success(serialize_album(&record)))
}

/// PATCH /api/albums/:id - partial update
pub async fn album_update(
    State(state): State<AppState>,
    Existing { id, .. }: Existing<Album>,
    JsonBody(body): JsonBody,
) -> ApiResult<()> {
    let fields = partial_update(&body, ALBUM_FIELDS)?;
    AlbumService::new(&state.pool).update_album(id, &fields).await?;

    tracing::info!("Album with id {} updated.", id);
    Ok(ApiResponse::no_content())
}

/// DELETE /api/albums/:id - delete album
pub async fn album_delete(
    State(state): State<AppState>,
    Existing { id, .. }: Existing<Album>,
) -> ApiResult<()> {
    AlbumService::new(&state.pool).delete_album(id).await?;

    tracing::info!("Album with id {} deleted.", id);
    Ok(ApiResponse::no_content())
}
