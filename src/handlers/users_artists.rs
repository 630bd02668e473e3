use axum::extract::{Query, State};

use super::{parent_user_id, UserIdQuery};
use crate::api::format::{serialize_all, serialize_user_artist, UserArtistOutput};
use crate::api::validate::require_fields;
use crate::api::{FieldSpec, JsonBody};
use crate::database::models::UserArtist;
use crate::middleware::{ApiResponse, ApiResult, Existing};
use crate::services::UserArtistService;
use crate::types::AppState;

const USER_ARTIST_FIELDS: &[FieldSpec] =
    &[FieldSpec::integer("user_id"), FieldSpec::integer("artist")];

/// GET /api/usersartists?userId=ID - a user's artists with names
pub async fn user_artist_list(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Vec<UserArtistOutput>> {
    let Some(user_id) = parent_user_id(&query)? else {
        return Ok(ApiResponse::success(Vec::new()));
    };

    let entries = UserArtistService::new(&state.pool).get_users_artists(user_id).await?;
    Ok(ApiResponse::success(serialize_all(&entries, serialize_user_artist)))
}

/// POST /api/usersartists - follow an artist
pub async fn user_artist_create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<UserArtist> {
    let new_link = require_fields(&body, USER_ARTIST_FIELDS)?;
    let link = UserArtistService::new(&state.pool).insert_user_artist(&new_link).await?;

    tracing::info!("User Artist with id {} created.", link.usersartists_id);
    Ok(ApiResponse::created(format!("/api/usersartists/{}", link.usersartists_id), link))
}

/// GET /api/usersartists/:id - raw link row
pub async fn user_artist_get(
    Existing { record, .. }: Existing<UserArtist>,
) -> ApiResult<UserArtist> {
    Ok(ApiResponse::success(record))
}

/// DELETE /api/usersartists/:id
pub async fn user_artist_delete(
    State(state): State<AppState>,
    Existing { id, .. }: Existing<UserArtist>,
) -> ApiResult<()> {
    UserArtistService::new(&state.pool).delete_user_artist(id).await?;

    tracing::info!("User Artist with id {} deleted.", id);
    Ok(ApiResponse::no_content())
}
