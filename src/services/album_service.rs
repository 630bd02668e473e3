use sqlx::PgPool;

use crate::database::models::Album;
use crate::database::{Assignments, DatabaseError, Repository};

pub struct AlbumService {
    albums: Repository<Album>,
}

impl AlbumService {
    pub fn new(pool: &PgPool) -> Self {
        Self {
            albums: Repository::new(pool),
        }
    }

    pub async fn get_all_albums(&self) -> Result<Vec<Album>, DatabaseError> {
        self.albums.select_all().await
    }

    pub async fn insert_album(&self, new_album: &Assignments) -> Result<Album, DatabaseError> {
        self.albums.insert(new_album).await
    }

    pub async fn update_album(
        &self,
        album_id: i32,
        fields: &Assignments,
    ) -> Result<u64, DatabaseError> {
        self.albums.update_by_id(album_id, fields).await
    }

    pub async fn delete_album(&self, album_id: i32) -> Result<u64, DatabaseError> {
        self.albums.delete_by_id(album_id).await
    }
}
