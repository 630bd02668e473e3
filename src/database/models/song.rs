use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Song {
    pub song_id: i32,
    pub song_name: String,
    /// References `albums.album_id`
    pub album: i32,
}

impl Resource for Song {
    const TABLE: &'static str = "songs";
    const ID_COLUMN: &'static str = "song_id";
    const LABEL: &'static str = "Song";
}
