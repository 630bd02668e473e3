pub mod album_service;
pub mod artist_service;
pub mod song_service;
pub mod user_album_service;
pub mod user_artist_service;
pub mod user_service;

pub use album_service::AlbumService;
pub use artist_service::ArtistService;
pub use song_service::SongService;
pub use user_album_service::UserAlbumService;
pub use user_artist_service::UserArtistService;
pub use user_service::UserService;
