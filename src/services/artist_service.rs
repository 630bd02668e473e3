use sqlx::PgPool;

use crate::database::models::Artist;
use crate::database::{Assignments, DatabaseError, Repository};

pub struct ArtistService {
    artists: Repository<Artist>,
}

impl ArtistService {
    pub fn new(pool: &PgPool) -> Self {
        Self {
            artists: Repository::new(pool),
        }
    }

    pub async fn get_all_artists(&self) -> Result<Vec<Artist>, DatabaseError> {
        self.artists.select_all().await
    }

    pub async fn insert_artist(&self, new_artist: &Assignments) -> Result<Artist, DatabaseError> {
        self.artists.insert(new_artist).await
    }

    pub async fn update_artist(
        &self,
        artist_id: i32,
        fields: &Assignments,
    ) -> Result<u64, DatabaseError> {
        self.artists.update_by_id(artist_id, fields).await
    }

    pub async fn delete_artist(&self, artist_id: i32) -> Result<u64, DatabaseError> {
        self.artists.delete_by_id(artist_id).await
    }
}
