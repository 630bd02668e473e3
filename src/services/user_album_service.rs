use sqlx::PgPool;

use crate::database::models::{UserAlbum, UserAlbumEntry};
use crate::database::{Assignments, DatabaseError, QueryBuilder, Repository};

pub struct UserAlbumService {
    pool: PgPool,
    users_albums: Repository<UserAlbum>,
}

impl UserAlbumService {
    pub fn new(pool: &PgPool) -> Self {
        Self {
            pool: pool.clone(),
            users_albums: Repository::new(pool),
        }
    }

    /// A user's saved albums with the album's display fields
    pub async fn get_users_albums(
        &self,
        user_id: i32,
    ) -> Result<Vec<UserAlbumEntry>, DatabaseError> {
        QueryBuilder::new("usersalbums")?
            .select(&["usersalbums_id", "album", "album_name", "genre", "artist"])
            .inner_join("albums", "usersalbums.album", "albums.album_id")
            .where_eq("user_id", user_id)
            .order_by("usersalbums_id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn insert_user_album(
        &self,
        new_user_album: &Assignments,
    ) -> Result<UserAlbum, DatabaseError> {
        self.users_albums.insert(new_user_album).await
    }

    pub async fn delete_user_album(&self, usersalbums_id: i32) -> Result<u64, DatabaseError> {
        self.users_albums.delete_by_id(usersalbums_id).await
    }
}
