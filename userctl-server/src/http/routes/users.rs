//! User endpoints
//!
//! ```text
//! GET    /api/go/users
//! POST   /api/go/users       {"name": "...", "email": "..."}
//! GET    /api/go/users/{id}
//! PUT    /api/go/users/{id}  {"name": "...", "email": "..."}
//! DELETE /api/go/users/{id}
//! ```

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{DbError, NewUser, User, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, UserId};
use crate::http::server::AppState;

/// Create/update request. Any client-supplied `id` is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<UserRequest> for NewUser {
    fn from(req: UserRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
        }
    }
}

/// User response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

/// GET /api/go/users - list all users
async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = UserRepo::new(&state.pool).list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /api/go/users - create a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<UserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserRepo::new(&state.pool).create(req.into()).await?;
    tracing::info!(user_id = user.id, "created user");
    Ok(Json(UserResponse::from(user)))
}

/// GET /api/go/users/{id} - get a single user
///
/// Any lookup failure, missing row or query error, is answered with 404.
async fn get_user(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserRepo::new(&state.pool)
        .get(id)
        .await
        .map_err(|e| {
            if let DbError::Sqlx(err) = &e {
                tracing::warn!(user_id = id, "user lookup failed: {}", err);
            }
            ApiError::NotFound {
                resource: "user",
                id: id.to_string(),
            }
        })?;
    Ok(Json(UserResponse::from(user)))
}

/// PUT /api/go/users/{id} - replace name and email
async fn update_user(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
    JsonBody(req): JsonBody<UserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserRepo::new(&state.pool).update(id, req.into()).await?;
    tracing::info!(user_id = user.id, "updated user");
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /api/go/users/{id} - delete a user (200 even if already gone)
async fn delete_user(
    State(state): State<Arc<AppState>>,
    UserId(id): UserId,
) -> Result<StatusCode, ApiError> {
    let deleted = UserRepo::new(&state.pool).delete(id).await?;
    tracing::info!(user_id = id, deleted, "deleted user");
    Ok(StatusCode::OK)
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/go/users", get(list_users).post(create_user))
        .route(
            "/api/go/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::server::tests::offline_router;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn send(method: &str, uri: &str, body: &'static str) -> (StatusCode, serde_json::Value) {
        let response = offline_router()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[test]
    fn request_ignores_client_id_and_defaults_missing_fields() {
        let req: UserRequest = serde_json::from_str(r#"{"id": 99, "name": "A"}"#).unwrap();
        let new = NewUser::from(req);
        assert_eq!(new.name.as_deref(), Some("A"));
        assert_eq!(new.email, None);
    }

    #[test]
    fn response_serializes_all_fields() {
        let response = UserResponse::from(User {
            id: 1,
            name: Some("A".into()),
            email: None,
        });
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"id": 1, "name": "A", "email": null})
        );
    }

    #[tokio::test]
    async fn malformed_json_on_create_is_400() {
        let (status, body) = send("POST", "/api/go/users", r#"{"name": "A", "#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn malformed_json_on_update_is_400() {
        let (status, _) = send("PUT", "/api/go/users/1", "not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_integer_id_is_404() {
        for method in ["GET", "DELETE"] {
            let (status, body) = send(method, "/api/go/users/abc", "").await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{method}");
            assert_eq!(body["message"], "user 'abc' not found");
        }
    }

    #[tokio::test]
    async fn get_during_database_outage_is_404() {
        let (status, body) = send("GET", "/api/go/users/1", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["message"], "user '1' not found");
    }

    #[tokio::test]
    async fn json_array_body_is_400() {
        let (status, body) = send("POST", "/api/go/users", r#"["A", "a@x.com"]"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn database_outage_is_500_not_a_crash() {
        let router = offline_router();

        for _ in 0..2 {
            let response = router
                .clone()
                .oneshot(
                    Request::builder()
                        .uri("/api/go/users")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
