pub mod answers;
pub mod progress;
pub mod questions;

use axum::{routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    }))
}
