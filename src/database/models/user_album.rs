use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;

/// A saved album in a user's library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserAlbum {
    pub usersalbums_id: i32,
    pub user_id: i32,
    pub album: i32,
}

impl Resource for UserAlbum {
    const TABLE: &'static str = "usersalbums";
    const ID_COLUMN: &'static str = "usersalbums_id";
    const LABEL: &'static str = "User Album";
}

/// A library row joined with the album it points at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserAlbumEntry {
    pub usersalbums_id: i32,
    pub album: i32,
    pub album_name: String,
    pub genre: String,
    pub artist: i32,
}
