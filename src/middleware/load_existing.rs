use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::database::models::Resource;
use crate::database::Repository;
use crate::error::ApiError;
use crate::types::AppState;

/// A row loaded from the `:id` path segment before the handler runs.
///
/// Requests for a missing row, or an id that is not an integer, stop here
/// with `404 "<Label> doesn't exist"`.
#[derive(Debug, Clone)]
pub struct Existing<T> {
    pub id: i32,
    pub record: T,
}

#[async_trait]
impl<T: Resource> FromRequestParts<AppState> for Existing<T> {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::not_found(T::not_found_message()))?;

        let Ok(id) = raw_id.parse::<i32>() else {
            tracing::error!("{} with id {} not found", T::LABEL, raw_id);
            return Err(ApiError::not_found(T::not_found_message()));
        };

        match Repository::<T>::new(&state.pool).select_by_id(id).await? {
            Some(record) => Ok(Self { id, record }),
            None => {
                tracing::error!("{} with id {} not found", T::LABEL, id);
                Err(ApiError::not_found(T::not_found_message()))
            }
        }
    }
}

// Handlers are only routable when the loader's future is Send
#[cfg(test)]
#[allow(dead_code)]
mod tests {
    use super::*;
    use crate::database::models::{Album, UserAlbum};

    fn assert_send<F: Send>(_: &F) {}

    fn loader_futures_are_send(parts: &mut Parts, state: &AppState) {
        assert_send(&Existing::<Album>::from_request_parts(parts, state));
        assert_send(&Existing::<UserAlbum>::from_request_parts(parts, state));
    }
}
