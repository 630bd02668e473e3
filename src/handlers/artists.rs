use axum::extract::State;

use crate::api::format::{serialize_all, serialize_artist, ArtistOutput};
use crate::api::validate::{partial_update, require_truthy_fields};
use crate::api::{FieldSpec, JsonBody};
use crate::database::models::Artist;
use crate::middleware::{ApiResponse, ApiResult, Existing};
use crate::services::ArtistService;
use crate::types::AppState;

const ARTIST_FIELDS: &[FieldSpec] = &[FieldSpec::text("artist_name")];

/// GET /api/artists - list artists
pub async fn artist_list(State(state): State<AppState>) -> ApiResult<Vec<ArtistOutput>> {
    let artists = ArtistService::new(&state.pool).get_all_artists().await?;
    Ok(ApiResponse::success(serialize_all(&artists, serialize_artist)))
}

/// POST /api/artists - create artist (empty names are rejected)
pub async fn artist_create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<ArtistOutput> {
    let new_artist = require_truthy_fields(&body, ARTIST_FIELDS)?;
    let artist = ArtistService::new(&state.pool).insert_artist(&new_artist).await?;

    tracing::info!("Artist with id {} created.", artist.artist_id);
    Ok(ApiResponse::created(
        format!("/api/artists/{}", artist.artist_id),
        serialize_artist(&artist),
    ))
}

/// GET /api/artists/:id - show artist
pub async fn artist_get(Existing { record, .. }: Existing<Artist>) -> ApiResult<ArtistOutput> {
    Ok(ApiResponse::success(serialize_artist(&record)))
}

/// PATCH /api/artists/:id - rename artist
pub async fn artist_update(
    State(state): State<AppState>,
    Existing { id, .. }: Existing<Artist>,
    JsonBody(body): JsonBody,
) -> ApiResult<()> {
    let fields = partial_update(&body, ARTIST_FIELDS)?;
    ArtistService::new(&state.pool).update_artist(id, &fields).await?;

    tracing::info!("Artist with id {} updated.", id);
    Ok(ApiResponse::no_content())
}

/// DELETE /api/artists/:id - delete artist
pub async fn artist_delete(
    State(state): State<AppState>,
    Existing { id, .. }: Existing<Artist>,
) -> ApiResult<()> {
    ArtistService::new(&state.pool).delete_artist(id).await?;

    tracing::info!("Artist with id {} deleted.", id);
    Ok(ApiResponse::no_content())
}
