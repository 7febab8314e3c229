//! Health check endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: String,
    version: String,
    data_dir: String,
}

async fn health_check() -> Json<HealthResponse> {
    let data_dir = std::env::var("TODO_DATA_DIR").unwrap_or_else(|_| ".todo-data".to_string());

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data_dir,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
