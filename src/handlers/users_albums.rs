use axum::extract::{Query, State};

use super::{parent_user_id, UserIdQuery};
use crate::api::format::{serialize_all, serialize_user_album, UserAlbumOutput};
use crate::api::validate::require_fields;
use crate::api::{FieldSpec, JsonBody};
use crate::database::models::UserAlbum;
use crate::middleware::{ApiResponse, ApiResult, Existing};
use crate::services::UserAlbumService;
use crate::types::AppState;

const USER_ALBUM_FIELDS: &[FieldSpec] =
    &[FieldSpec::integer("user_id"), FieldSpec::integer("album")];

/// GET /api/usersalbums?userId=ID - a user's albums with album details
pub async fn user_album_list(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> ApiResult<Vec<UserAlbumOutput>> {
    let Some(user_id) = parent_user_id(&query)? else {
        return Ok(ApiResponse::success(Vec::new()));
    };

    let entries = UserAlbumService::new(&state.pool).get_users_albums(user_id).await?;
    Ok(ApiResponse::success(serialize_all(&entries, serialize_user_album)))
}

/// POST /api/usersalbums - save an album to a user's library
pub async fn user_album_create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<UserAlbum> {
    let new_link = require_fields(&body, USER_ALBUM_FIELDS)?;
    let link = UserAlbumService::new(&state.pool).insert_user_album(&new_link).await?;

    tracing::info!("User Album with id {} created.", link.usersalbums_id);
    Ok(ApiResponse::created(format!("/api/usersalbums/{}", link.usersalbums_id), link))
}

/// GET /api/usersalbums/:id - raw link row
pub async fn user_album_get(Existing { record, .. }: Existing<UserAlbum>) -> ApiResult<UserAlbum> {
    Ok(ApiResponse::success(record))
}

/// DELETE /api/usersalbums/:id
pub async fn user_album_delete(
    State(state): State<AppState>,
    Existing { id, .. }: Existing<UserAlbum>,
) -> ApiResult<()> {
    UserAlbumService::new(&state.pool).delete_user_album(id).await?;

    tracing::info!("User Album with id {} deleted.", id);
    Ok(ApiResponse::no_content())
}
