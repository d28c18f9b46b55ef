use axum::{extract::State, routing::post, Json, Router};

use crate::error::Result;
use crate::evaluator;
use crate::extractors::JsonBody;
use crate::models::{AssessmentResult, SubmitAnswersRequest};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/submit_answers", post(submit_answers))
}

async fn submit_answers(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SubmitAnswersRequest>,
) -> Result<Json<AssessmentResult>> {
    let questions = state.questions.load(&payload.day)?;
    let result = evaluator::evaluate(&payload.day, &questions, &payload.answers)?;

    if result.pass {
        state.controller.record_pass(&payload.day).await?;
    }

    tracing::info!(
        day = %result.day,
        score = result.score,
        total = result.total,
        pass = result.pass,
        "assessment evaluated"
    );
    Ok(Json(result))
}
