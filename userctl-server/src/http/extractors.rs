//! Custom Axum extractors
//!
//! Both extractors reject with [`ApiError`], so handlers only ever see
//! a decoded id and a decoded body.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;

/// Extract a user id from the `{id}` path segment.
///
/// A segment that is not an integer can never match a row, so it is
/// reported as not found.
pub struct UserId(pub i32);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound {
                resource: "user",
                id: String::new(),
            })?;

        let parsed = raw.trim().parse::<i32>();
        match parsed {
            Ok(id) => Ok(Self(id)),
            Err(_) => Err(ApiError::NotFound {
                resource: "user",
                id: raw,
            }),
        }
    }
}

/// JSON request body.
///
/// Unlike `axum::Json` this does not require a `Content-Type` header, and
/// every decode failure (syntax, type mismatch, empty body, non-object
/// top level) is a 400.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                message: format!("failed to read request body: {}", e),
            })?;

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| ApiError::BadRequest {
            message: format!("JSON parse error: {}", e),
        })?;

        // serde would otherwise decode a struct from a positional array
        if !value.is_object() {
            return Err(ApiError::BadRequest {
                message: "request body must be a JSON object".into(),
            });
        }

        serde_json::from_value(value)
            .map(Self)
            .map_err(|e| ApiError::BadRequest {
                message: format!("JSON parse error: {}", e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: Option<String>,
    }

    async fn extract(body: &'static str) -> Result<JsonBody<Payload>, ApiError> {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap();
        JsonBody::<Payload>::from_request(req, &()).await
    }

    #[tokio::test]
    async fn decodes_without_content_type() {
        let JsonBody(payload) = extract(r#"{"name": "A"}"#).await.unwrap();
        assert_eq!(payload.name.as_deref(), Some("A"));
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let err = extract(r#"{"name": "#).await.err().unwrap();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn wrong_type_is_bad_request() {
        let err = extract(r#"{"name": 12}"#).await.err().unwrap();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn array_body_is_bad_request() {
        let err = extract(r#"["A"]"#).await.err().unwrap();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn scalar_body_is_bad_request() {
        let err = extract("null").await.err().unwrap();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_body_is_bad_request() {
        let err = extract("").await.err().unwrap();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
