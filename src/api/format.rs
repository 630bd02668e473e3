//! Public shapes of stored rows. Free text goes through the markup filter;
//! ids and foreign keys pass through as stored.

use serde::Serialize;

use crate::api::sanitize::filter_xss;
use crate::database::models::{Album, Artist, Song, User, UserAlbumEntry, UserArtistEntry, Username};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumOutput {
    pub album_id: i32,
    pub album_name: String,
    pub genre: String,
    pub artist: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistOutput {
    pub artist_id: i32,
    pub artist_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongOutput {
    pub song_id: i32,
    pub song_name: String,
    pub album: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserOutput {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
}

/// Returned by login: the user without the password
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserInfoOutput {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsernameOutput {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserAlbumOutput {
    pub usersalbums_id: i32,
    pub album: i32,
    pub album_name: String,
    pub genre: String,
    pub artist: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserArtistOutput {
    pub usersartists_id: i32,
    pub user_id: i32,
    pub artist_id: i32,
    pub artist_name: String,
}

pub fn serialize_album(album: &Album) -> AlbumOutput {
    AlbumOutput {
        album_id: album.album_id,
        album_name: filter_xss(&album.album_name),
        genre: filter_xss(&album.genre),
        artist: album.artist,
    }
}

pub fn serialize_artist(artist: &Artist) -> ArtistOutput {
    ArtistOutput {
        artist_id: artist.artist_id,
        artist_name: filter_xss(&artist.artist_name),
    }
}

pub fn serialize_song(song: &Song) -> SongOutput {
    SongOutput {
        song_id: song.song_id,
        song_name: filter_xss(&song.song_name),
        album: song.album,
    }
}

pub fn serialize_user(user: &User) -> UserOutput {
    UserOutput {
        user_id: user.user_id,
        first_name: filter_xss(&user.first_name),
        last_name: filter_xss(&user.last_name),
        username: filter_xss(&user.username),
        password: filter_xss(&user.password),
    }
}

pub fn serialize_user_info(user: &User) -> UserInfoOutput {
    UserInfoOutput {
        user_id: user.user_id,
        first_name: filter_xss(&user.first_name),
        last_name: filter_xss(&user.last_name),
        username: filter_xss(&user.username),
    }
}

pub fn serialize_username(user: &Username) -> UsernameOutput {
    UsernameOutput {
        username: filter_xss(&user.username),
    }
}

pub fn serialize_user_album(entry: &UserAlbumEntry) -> UserAlbumOutput {
    UserAlbumOutput {
        usersalbums_id: entry.usersalbums_id,
        album: entry.album,
        album_name: filter_xss(&entry.album_name),
        genre: filter_xss(&entry.genre),
        artist: entry.artist,
    }
}

pub fn serialize_user_artist(entry: &UserArtistEntry) -> UserArtistOutput {
    UserArtistOutput {
        usersartists_id: entry.usersartists_id,
        user_id: entry.user_id,
        artist_id: entry.artist_id,
        artist_name: filter_xss(&entry.artist_name),
    }
}

/// Serialize every row of a listing
pub fn serialize_all<T, O>(rows: &[T], serialize: impl Fn(&T) -> O) -> Vec<O> {
    rows.iter().map(serialize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn malicious_user() -> User {
        User {
            user_id: 911,
            first_name: r#"Naughty <script>alert("xss");</script>"#.to_string(),
            last_name: "Test".to_string(),
            username: "<b>bold</b>".to_string(),
            password: "pass<word>".to_string(),
        }
    }

    #[test]
    fn album_escapes_free_text_only() {
        let album = Album {
            album_id: 911,
            album_name: r#"Naughty naughty very naughty <script>alert("xss");</script>"#
                .to_string(),
            genre: "Pop".to_string(),
            artist: 1,
        };
        let out = serialize_album(&album);
        assert_eq!(
            out.album_name,
            r#"Naughty naughty very naughty &lt;script&gt;alert("xss");&lt;/script&gt;"#
        );
        assert_eq!(out.album_id, 911);
        assert_eq!(out.artist, 1);
    }

    #[test]
    fn login_shape_has_no_password() {
        let out = serde_json::to_value(serialize_user_info(&malicious_user())).unwrap();
        assert!(out.get("password").is_none());
        assert_eq!(out["first_name"], r#"Naughty &lt;script&gt;alert("xss");&lt;/script&gt;"#);
        assert_eq!(out["username"], "<b>bold</b>");
    }

    #[test]
    fn full_user_shape_filters_password() {
        let out = serialize_user(&malicious_user());
        assert_eq!(out.password, "pass&lt;word&gt;");
    }

    #[test]
    fn join_listing_shapes() {
        let entry = UserArtistEntry {
            usersartists_id: 4,
            user_id: 1,
            artist_id: 2,
            artist_name: "Ariana Grande".to_string(),
        };
        assert_eq!(
            serde_json::to_value(serialize_user_artist(&entry)).unwrap(),
            json!({
                "usersartists_id": 4,
                "user_id": 1,
                "artist_id": 2,
                "artist_name": "Ariana Grande",
            })
        );

        let entries = vec![UserAlbumEntry {
            usersalbums_id: 1,
            album: 3,
            album_name: "Woooo".to_string(),
            genre: "Pop".to_string(),
            artist: 2,
        }];
        let out = serialize_all(&entries, serialize_user_album);
        assert_eq!(
            serde_json::to_value(out).unwrap(),
            json!([{
                "usersalbums_id": 1,
                "album": 3,
                "album_name": "Woooo",
                "genre": "Pop",
                "artist": 2,
            }])
        );
    }
}
