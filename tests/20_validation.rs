mod common;

use anyhow::Result;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

use common::{lazy_pool, TestServer};

async fn error_message(res: reqwest::Response) -> Result<String> {
    let body: Value = res.json().await?;
    Ok(body["error"]["message"].as_str().unwrap_or_default().to_string())
}

#[tokio::test]
async fn create_reports_first_missing_field() -> Result<()> {
    let server = TestServer::start(lazy_pool()?).await?;

    let cases = [
        ("/api/albums", json!({ "genre": "Pop", "artist": 1 }), "album_name"),
        ("/api/albums", json!({ "album_name": "x", "genre": null, "artist": 1 }), "genre"),
        ("/api/albums", json!({ "album_name": "x", "genre": "Pop" }), "artist"),
        ("/api/artists", json!({}), "artist_name"),
        ("/api/songs", json!({ "album": 1 }), "song_name"),
        ("/api/songs", json!({ "song_name": "Royals" }), "album"),
        ("/api/users", json!({ "last_name": "Smith" }), "first_name"),
        (
            "/api/users",
            json!({ "first_name": "Sam", "last_name": "Smith", "username": "sam" }),
            "password",
        ),
        ("/api/usersalbums", json!({ "album": 1 }), "user_id"),
        ("/api/usersalbums", json!({ "user_id": 1 }), "album"),
        ("/api/usersartists", json!({ "user_id": 1 }), "artist"),
    ];

    for (path, body, field) in cases {
        let res = server.request(Method::POST, path).json(&body).send().await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "POST {} {}", path, body);
        assert_eq!(error_message(res).await?, format!("Missing '{}' in request body", field));
    }
    Ok(())
}

#[tokio::test]
async fn artist_create_rejects_empty_name() -> Result<()> {
    let server = TestServer::start(lazy_pool()?).await?;

    let res = server
        .request(Method::POST, "/api/artists")
        .json(&json!({ "artist_name": "" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(res).await?, "Missing 'artist_name' in request body");
    Ok(())
}

#[tokio::test]
async fn login_requires_username_and_password() -> Result<()> {
    let server = TestServer::start(lazy_pool()?).await?;

    for body in [
        json!({}),
        json!({ "username": "sam.smith" }),
        json!({ "username": "sam.smith", "password": "" }),
    ] {
        let res = server.request(Method::POST, "/api/users/login").json(&body).send().await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            error_message(res).await?,
            "Request body must contain 'username' and 'password'"
        );
    }
    Ok(())
}

#[tokio::test]
async fn join_listings_require_user_id() -> Result<()> {
    let server = TestServer::start(lazy_pool()?).await?;

    for path in ["/api/usersalbums", "/api/usersartists", "/api/usersalbums?userId="] {
        let res = server.request(Method::GET, path).send().await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "GET {}", path);
        assert_eq!(error_message(res).await?, "Query must contain 'userId'");
    }
    Ok(())
}

#[tokio::test]
async fn non_integer_user_id_lists_nothing() -> Result<()> {
    let server = TestServer::start(lazy_pool()?).await?;

    let res = server.request(Method::GET, "/api/usersartists?userId=abc").send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!([]));
    Ok(())
}

#[tokio::test]
async fn non_integer_id_is_not_found() -> Result<()> {
    let server = TestServer::start(lazy_pool()?).await?;

    let cases = [
        ("/api/albums/abc", "Album doesn't exist"),
        ("/api/artists/1.5", "Artist doesn't exist"),
        ("/api/songs/x", "Song doesn't exist"),
        ("/api/users/me", "User doesn't exist"),
        ("/api/usersalbums/none", "User Album doesn't exist"),
        ("/api/usersartists/none", "User Artist doesn't exist"),
    ];

    for (path, message) in cases {
        let res = server.request(Method::GET, path).send().await?;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "GET {}", path);
        assert_eq!(error_message(res).await?, message);
    }
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() -> Result<()> {
    let server = TestServer::start(lazy_pool()?).await?;

    let res = server
        .request(Method::POST, "/api/songs")
        .header("Content-Type", "application/json")
        .body("{\"song_name\": ")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(res).await?, "Malformed JSON in request body");
    Ok(())
}

#[tokio::test]
async fn empty_body_is_validated_as_an_empty_object() -> Result<()> {
    let server = TestServer::start(lazy_pool()?).await?;

    let res = server.request(Method::POST, "/api/albums").send().await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(res).await?, "Missing 'album_name' in request body");
    Ok(())
}
