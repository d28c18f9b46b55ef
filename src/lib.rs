pub mod controller;
pub mod email;
pub mod error;
pub mod evaluator;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod store;

use axum::Router;

use controller::ProgressController;
use store::QuestionStore;

#[derive(Clone)]
pub struct AppState {
    pub questions: QuestionStore,
    pub controller: ProgressController,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::routes())
        .merge(handlers::progress::routes())
        .merge(handlers::questions::routes())
        .merge(handlers::answers::routes())
        .with_state(state)
}
