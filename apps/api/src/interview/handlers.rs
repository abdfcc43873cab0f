//! Axum route handlers for the interview flow: generate, answers, score.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::interview::prompts::{build_question_prompt, build_scoring_prompt};
use crate::interview::questions::{parse_questions, EXPECTED_QUESTION_COUNT};
use crate::state::AppState;
use crate::storage;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub job_description: String,
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAnswersRequest {
    pub answers: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateAnswersResponse {
    pub answers: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score_output: String,
    pub saved_as: String,
}

#[derive(Debug, Serialize)]
pub struct SessionListResponse {
    pub sessions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interview/generate
///
/// Builds the question prompt from the JD and résumé, calls the generation
/// API, and replaces the session with the parsed questions plus one blank
/// answer per question. The session is untouched when validation or the
/// upstream call fails.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    if request.job_description.trim().is_empty() || request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Please provide both job description and résumé text".to_string(),
        ));
    }

    let prompt = build_question_prompt(&request.job_description, &request.resume_text);
    let output = state.llm.generate(&prompt).await?;

    let questions = parse_questions(&output);
    if questions.len() != EXPECTED_QUESTION_COUNT {
        // Accepted as-is: the prompt requests five but the parser keeps
        // whatever came back. See DESIGN.md.
        warn!(
            "prompt asked for {} questions, model returned {}",
            EXPECTED_QUESTION_COUNT,
            questions.len()
        );
    }

    let mut session = state.session.lock().expect("session lock poisoned");
    session.reset_with_questions(
        request.job_description,
        request.resume_text,
        questions.clone(),
    );

    Ok(Json(GenerateQuestionsResponse { questions }))
}

/// PUT /api/v1/interview/answers
///
/// Replaces the candidate's answers. The vector must be index-aligned with
/// the current questions; anything else would break the session invariant.
pub async fn handle_update_answers(
    State(state): State<AppState>,
    Json(request): Json<UpdateAnswersRequest>,
) -> Result<Json<UpdateAnswersResponse>, AppError> {
    let mut session = state.session.lock().expect("session lock poisoned");

    if !session.has_questions() {
        return Err(AppError::Validation(
            "No questions to answer yet; generate questions first".to_string(),
        ));
    }
    if request.answers.len() != session.questions.len() {
        return Err(AppError::Validation(format!(
            "Expected {} answers, got {}",
            session.questions.len(),
            request.answers.len()
        )));
    }

    session.answers = request.answers;
    Ok(Json(UpdateAnswersResponse {
        answers: session.answers.clone(),
    }))
}

/// POST /api/v1/interview/score
///
/// Builds the scoring prompt from the current questions and answers, calls
/// the generation API, persists the completed session, and returns the raw
/// score text together with the saved filename. Nothing is persisted on
/// failure.
pub async fn handle_score_answers(
    State(state): State<AppState>,
) -> Result<Json<ScoreResponse>, AppError> {
    // Snapshot under the lock, then release it before the network call.
    let (prompt, snapshot) = {
        let session = state.session.lock().expect("session lock poisoned");
        if !session.has_questions() {
            return Err(AppError::Validation(
                "No questions to score; generate questions first".to_string(),
            ));
        }
        (
            build_scoring_prompt(&session.questions, &session.answers),
            session.clone(),
        )
    };

    let score_output = state.llm.generate(&prompt).await?;

    let record = snapshot.to_record(score_output.clone());
    let saved_as = storage::persist_session(&state.config.storage_dir, &record)?;
    info!("session saved as {saved_as}");

    Ok(Json(ScoreResponse {
        score_output,
        saved_as,
    }))
}

/// GET /api/v1/sessions
///
/// Filenames of all persisted session records, in session order.
pub async fn handle_list_sessions(
    State(state): State<AppState>,
) -> Result<Json<SessionListResponse>, AppError> {
    let sessions = storage::list_sessions(&state.config.storage_dir)?;
    Ok(Json(SessionListResponse { sessions }))
}
