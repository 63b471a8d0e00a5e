//! Welcome endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Welcome response. The capitalised key is part of the wire contract.
#[derive(Serialize)]
pub struct WelcomeResponse {
    #[serde(rename = "Message")]
    pub message: &'static str,
}

/// GET /
async fn home() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Backend Service in Go!",
    })
}

/// Home routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(home))
}
