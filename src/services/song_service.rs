use sqlx::PgPool;

use crate::database::models::Song;
use crate::database::{Assignments, DatabaseError, Repository};

pub struct SongService {
    songs: Repository<Song>,
}

impl SongService {
    pub fn new(pool: &PgPool) -> Self {
        Self {
            songs: Repository::new(pool),
        }
    }

    pub async fn get_all_songs(&self) -> Result<Vec<Song>, DatabaseError> {
        self.songs.select_all().await
    }

    pub async fn insert_song(&self, new_song: &Assignments) -> Result<Song, DatabaseError> {
        self.songs.insert(new_song).await
    }

    pub async fn update_song(
        &self,
        song_id: i32,
        fields: &Assignments,
    ) -> Result<u64, DatabaseError> {
        self.songs.update_by_id(song_id, fields).await
    }

    pub async fn delete_song(&self, song_id: i32) -> Result<u64, DatabaseError> {
        self.songs.delete_by_id(song_id).await
    }
}
