use sqlx::PgPool;

use crate::database::models::{UserArtist, UserArtistEntry};
use crate::database::{Assignments, DatabaseError, QueryBuilder, Repository};

pub struct UserArtistService {
    pool: PgPool,
    users_artists: Repository<UserArtist>,
}

impl UserArtistService {
    pub fn new(pool: &PgPool) -> Self {
        Self {
            pool: pool.clone(),
            users_artists: Repository::new(pool),
        }
    }

    /// Artists followed by a user, with the artist's name
    pub async fn get_users_artists(
        &self,
        user_id: i32,
    ) -> Result<Vec<UserArtistEntry>, DatabaseError> {
        QueryBuilder::new("usersartists")?
            .select(&["usersartists_id", "user_id", "artist_id", "artist_name"])
            .inner_join("artists", "artists.artist_id", "usersartists.artist")
            .where_eq("user_id", user_id)
            .order_by("usersartists_id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn insert_user_artist(
        &self,
        new_user_artist: &Assignments,
    ) -> Result<UserArtist, DatabaseError> {
        self.users_artists.insert(new_user_artist).await
    }

    pub async fn delete_user_artist(&self, usersartists_id: i32) -> Result<u64, DatabaseError> {
        self.users_artists.delete_by_id(usersartists_id).await
    }
}
