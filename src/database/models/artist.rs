use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Artist {
    pub artist_id: i32,
    pub artist_name: String,
}

impl Resource for Artist {
    const TABLE: &'static str = "artists";
    const ID_COLUMN: &'static str = "artist_id";
    const LABEL: &'static str = "Artist";
}
