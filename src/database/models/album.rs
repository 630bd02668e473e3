use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Album {
    pub album_id: i32,
    pub album_name: String,
    pub genre: String,
    /// References `artists.artist_id`
    pub artist: i32,
}

impl Resource for Album {
    const TABLE: &'static str = "albums";
    const ID_COLUMN: &'static str = "album_id";
    const LABEL: &'static str = "Album";
}
