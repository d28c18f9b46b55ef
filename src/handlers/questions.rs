use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::error::{Error, Result};
use crate::models::PublicQuestion;
use crate::store::format_remaining;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/get_questions/{day}", get(get_questions))
}

/// Serve a day's question set with its motivational header. A missing
/// day file 404s before the cooldown gate is consulted; an active
/// cooldown denies the fetch for every day.
async fn get_questions(State(state): State<AppState>, Path(day): Path<String>) -> Result<Response> {
    if !state.questions.has_day(&day) {
        return Err(Error::NotFound(format!("Questions for {day} not found")));
    }

    if let Some(remaining) = state.controller.cooldown_remaining().await? {
        let body = json!({
            "message": "payye thinna panayum thinna",
            "remaining": format_remaining(remaining),
        });
        return Ok((StatusCode::FORBIDDEN, Json(body)).into_response());
    }

    let questions = if state.questions.is_unfiltered(&day) {
        serde_json::to_value(state.questions.load_raw(&day)?)?
    } else {
        let public: Vec<PublicQuestion> = state
            .questions
            .load(&day)?
            .into_iter()
            .map(PublicQuestion::from)
            .collect();
        serde_json::to_value(public)?
    };

    let day_header = state.controller.motivation_message(&day).await?;
    tracing::info!("questions for {day} served");

    let body = json!({
        "day": day,
        "day_header": day_header,
        "questions": questions,
    });
    Ok(Json(body).into_response())
}
