use axum::extract::State;
use serde_json::{Map, Value};

use crate::api::format::{
    serialize_all, serialize_user, serialize_user_info, serialize_username, UserInfoOutput,
    UserOutput, UsernameOutput,
};
use crate::api::validate::{is_truthy, partial_update, require_fields};
use crate::api::{FieldSpec, JsonBody};
use crate::database::models::User;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, Existing};
use crate::services::UserService;
use crate::types::AppState;

const USER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("first_name"),
    FieldSpec::text("last_name"),
    FieldSpec::text("username"),
    FieldSpec::text("password"),
];

/// GET /api/users - list users
pub async fn user_list(State(state): State<AppState>) -> ApiResult<Vec<UserOutput>> {
    let users = UserService::new(&state.pool).get_all_users().await?;
    Ok(ApiResponse::success(serialize_all(&users, serialize_user)))
}

/// POST /api/users - register user
pub async fn user_create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<UserOutput> {
    let new_user = require_fields(&body, USER_FIELDS)?;
    let user = UserService::new(&state.pool).insert_user(&new_user).await?;

    tracing::info!("User with id {} created.", user.user_id);
    Ok(ApiResponse::created(format!("/api/users/{}", user.user_id), serialize_user(&user)))
}

/// GET /api/users/usernames - every username, nothing else
pub async fn username_list(State(state): State<AppState>) -> ApiResult<Vec<UsernameOutput>> {
    let usernames = UserService::new(&state.pool).get_all_usernames().await?;
    Ok(ApiResponse::success(serialize_all(&usernames, serialize_username)))
}

/// POST /api/users/login - check a username/password pair
///
/// Existence is checked before the password, so an unknown username is a 404
/// and a wrong password a 401.
pub async fn user_login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<UserInfoOutput> {
    let (username, password) = login_credentials(&body)?;

    let Some(user) = UserService::new(&state.pool).get_user_by_username(&username).await? else {
        tracing::error!("User with username {} not found", username);
        return Err(ApiError::not_found("User doesn't exist"));
    };

    if password.as_str() != Some(user.password.as_str()) {
        tracing::error!("Incorrect password for user {}", user.user_id);
        return Err(ApiError::unauthorized("Incorrect password"));
    }

    Ok(ApiResponse::success(serialize_user_info(&user)))
}

/// GET /api/users/:id - show user
pub async fn user_get(Existing { record, .. }: Existing<User>) -> ApiResult<UserOutput> {
    Ok(ApiResponse::success(serialize_user(&record)))
}

/// PATCH /api/users/:id - partial update
pub async fn user_update(
    State(state): State<AppState>,
    Existing { id, .. }: Existing<User>,
    JsonBody(body): JsonBody,
) -> ApiResult<()> {
    let fields = partial_update(&body, USER_FIELDS)?;
    UserService::new(&state.pool).update_user(id, &fields).await?;

    tracing::info!("User with id {} updated.", id);
    Ok(ApiResponse::no_content())
}

/// DELETE /api/users/:id - delete user
pub async fn user_delete(
    State(state): State<AppState>,
    Existing { id, .. }: Existing<User>,
) -> ApiResult<()> {
    UserService::new(&state.pool).delete_user(id).await?;

    tracing::info!("User with id {} deleted.", id);
    Ok(ApiResponse::no_content())
}

/// Username as text and the raw password value; both must be truthy.
fn login_credentials(body: &Map<String, Value>) -> Result<(String, &Value), ApiError> {
    match (body.get("username"), body.get("password")) {
        (Some(username), Some(password)) if is_truthy(username) && is_truthy(password) => {
            let username = match username {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Ok((username, password))
        }
        _ => {
            tracing::error!("Login request without username or password");
            Err(ApiError::bad_request(
                "Request body must contain 'username' and 'password'",
            ))
        }
    }
}
