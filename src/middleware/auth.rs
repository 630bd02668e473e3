use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::types::AppState;

/// Shared-secret gate in front of every route.
///
/// The credential is the second space-separated word of the Authorization
/// header (`Bearer <token>`). No per-user identity is attached.
pub async fn bearer_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let provided = extract_token_from_headers(&headers);

    match (state.api_token.as_deref(), provided) {
        (Some(expected), Some(token)) if token == expected => Ok(next.run(request).await),
        _ => {
            tracing::error!("Unauthorized request to path: {}", request.uri().path());
            Err(ApiError::InvalidToken)
        }
    }
}

/// Extract the token word from the Authorization header
fn extract_token_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .split(' ')
        .nth(1)
}
