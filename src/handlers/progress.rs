use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};

use crate::error::Result;
use crate::models::DayStatus;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/get_progress", get(get_progress))
}

async fn get_progress(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, DayStatus>>> {
    let progress = state.controller.progress().await?;
    tracing::info!("loaded progress for {} days", progress.len());
    Ok(Json(progress))
}
