// One module per resource collection under /api
pub mod albums;
pub mod artists;
pub mod songs;
pub mod users;
pub mod users_albums;
pub mod users_artists;

use serde::Deserialize;

use crate::error::ApiError;

/// `?userId=` filter for the join collections
#[derive(Debug, Default, Deserialize)]
pub struct UserIdQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// The parent user id of a join listing.
///
/// Absent or empty is a 400. A value that is not an integer cannot match any
/// row, so `Ok(None)` tells the caller to answer with an empty list.
pub(crate) fn parent_user_id(query: &UserIdQuery) -> Result<Option<i32>, ApiError> {
    match query.user_id.as_deref() {
        None | Some("") => {
            tracing::error!("Query must contain 'userId'");
            Err(ApiError::bad_request("Query must contain 'userId'"))
        }
        Some(raw) => Ok(raw.trim().parse::<i32>().ok()),
    }
}
