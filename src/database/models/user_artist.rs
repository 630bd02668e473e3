use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;

/// An artist followed by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserArtist {
    pub usersartists_id: i32,
    pub user_id: i32,
    pub artist: i32,
}

impl Resource for UserArtist {
    const TABLE: &'static str = "usersartists";
    const ID_COLUMN: &'static str = "usersartists_id";
    const LABEL: &'static str = "User Artist";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserArtistEntry {
    pub usersartists_id: i32,
    pub user_id: i32,
    pub artist_id: i32,
    pub artist_name: String,
}
