pub mod health;

use axum::{
    response::Html,
    routing::{get, post, put},
    Router,
};

use crate::ingest::handlers::handle_upload_resume;
use crate::interview::handlers::{
    handle_generate_questions, handle_list_sessions, handle_score_answers, handle_update_answers,
};
use crate::state::AppState;

/// GET /
/// Serves the embedded single-page form UI.
async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health::health_handler))
        .route("/api/v1/resume/upload", post(handle_upload_resume))
        .route("/api/v1/interview/generate", post(handle_generate_questions))
        .route("/api/v1/interview/answers", put(handle_update_answers))
        .route("/api/v1/interview/score", post(handle_score_answers))
        .route("/api/v1/sessions", get(handle_list_sessions))
        .with_state(state)
}
