pub mod album;
pub mod artist;
pub mod song;
pub mod user;
pub mod user_album;
pub mod user_artist;

pub use album::Album;
pub use artist::Artist;
pub use song::Song;
pub use user::{User, Username};
pub use user_album::{UserAlbum, UserAlbumEntry};
pub use user_artist::{UserArtist, UserArtistEntry};

use sqlx::{postgres::PgRow, FromRow};

/// A table addressed by an integer primary key
pub trait Resource: for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin + 'static {
    const TABLE: &'static str;
    const ID_COLUMN: &'static str;
    /// Name used in not-found messages, e.g. "User Album"
    const LABEL: &'static str;

    fn not_found_message() -> String {
        format!("{} doesn't exist", Self::LABEL)
    }
}
