#[macro_use]
mod common;

use anyhow::Result;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use serial_test::serial;

use common::{seed_library, seed_songs, seed_users_albums, TestServer};

async fn get_json(server: &TestServer, path: &str) -> Result<Value> {
    Ok(server.request(Method::GET, path).send().await?.json().await?)
}

#[tokio::test]
#[serial]
async fn rejected_patches_leave_rows_unchanged() -> Result<()> {
    let pool = require_db!();
    seed_library(&pool).await?;
    seed_songs(&pool, &[("Royals", 1)]).await?;
    let server = TestServer::start(pool).await?;

    let cases = [
        ("/api/albums/1", json!({ "album_name": "", "genre": null, "artist": 0 })),
        ("/api/artists/1", json!({ "artist_name": "" })),
        ("/api/songs/1", json!({ "song_name": false, "unknown": "x" })),
        ("/api/users/1", json!({ "username": "", "password": "" })),
    ];

    for (path, body) in cases {
        let before = get_json(&server, path).await?;

        let res = server.request(Method::PATCH, path).json(&body).send().await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{}", path);

        assert_eq!(get_json(&server, path).await?, before, "{}", path);
    }
    Ok(())
}

#[tokio::test]
#[serial]
async fn missing_targets_change_nothing() -> Result<()> {
    let pool = require_db!();
    seed_library(&pool).await?;
    seed_users_albums(&pool, &[(1, 1)]).await?;
    let server = TestServer::start(pool).await?;

    let collections = ["/api/albums", "/api/artists", "/api/users"];
    let mut before = Vec::new();
    for path in collections {
        before.push(get_json(&server, path).await?);
    }

    for path in collections {
        let target = format!("{}/999", path);
        for method in [Method::PATCH, Method::DELETE] {
            let res = server
                .request(method.clone(), &target)
                .json(&json!({ "album_name": "x", "artist_name": "x", "username": "x" }))
                .send()
                .await?;
            assert_eq!(res.status(), StatusCode::NOT_FOUND, "{} {}", method, target);
        }
    }

    let res = server.request(Method::DELETE, "/api/usersalbums/999").send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    for (path, expected) in collections.iter().zip(&before) {
        assert_eq!(&get_json(&server, path).await?, expected, "{}", path);
    }
    let library = get_json(&server, "/api/usersalbums?userId=1").await?;
    assert_eq!(library.as_array().map(Vec::len), Some(1));
    Ok(())
}
