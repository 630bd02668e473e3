use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::{ApiError, SERVER_ERROR};
use crate::types::AppState;

/// Replaces the body of every 500 with a generic message in production.
///
/// The underlying error has already been logged where it was raised.
pub async fn server_error_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    if state.environment.is_production() && response.status() == StatusCode::INTERNAL_SERVER_ERROR {
        return ApiError::internal_server_error(SERVER_ERROR).into_response();
    }
    response
}
