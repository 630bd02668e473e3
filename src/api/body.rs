use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// JSON request body as a field map.
///
/// An empty body, or JSON that is not an object, yields an empty map so the
/// route's own validation reports what is missing.
#[derive(Debug, Clone, Default)]
pub struct JsonBody(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::error!("Failed to read request body: {}", e);
            ApiError::bad_request("Failed to read request body")
        })?;

        parse_body(&bytes).map(JsonBody)
    }
}

fn parse_body(bytes: &[u8]) -> Result<Map<String, Value>, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Ok(Map::new()),
        Err(e) => {
            tracing::error!("Malformed JSON in request body: {}", e);
            Err(ApiError::bad_request("Malformed JSON in request body"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_empty_map() {
        assert!(parse_body(b"").unwrap().is_empty());
        assert!(parse_body(b"  \n").unwrap().is_empty());
    }

    #[test]
    fn non_object_json_is_empty_map() {
        assert!(parse_body(b"[1, 2]").unwrap().is_empty());
        assert!(parse_body(b"\"text\"").unwrap().is_empty());
    }

    #[test]
    fn object_is_kept() {
        let map = parse_body(br#"{"artist_name": "Lorde"}"#).unwrap();
        assert_eq!(map["artist_name"], "Lorde");
    }

    #[test]
    fn malformed_json_is_bad_request() {
        let err = parse_body(b"{ not json").unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Malformed JSON in request body");
    }
}
