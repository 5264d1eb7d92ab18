//! HTTP handlers for follow-up chat

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::AppState;
use shared::ChatMessage;

/// A follow-up question about the current plan
#[derive(Debug, Deserialize, Validate)]
pub struct AskQuestionInput {
    #[validate(length(min = 1, max = 2000))]
    pub question: String,
}

/// Ask a follow-up question.
///
/// The transcript gains the question and a reply even when the model call
/// fails; the failure shows up as the reply text.
pub async fn ask_followup(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(input): Json<AskQuestionInput>,
) -> AppResult<Json<ChatMessage>> {
    input
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let session = state.sessions.get(session_id)?;
    let mut session = session.lock().await;
    let reply = state
        .advisory
        .answer_followup(&mut session, input.question.trim())
        .await?;

    Ok(Json(reply))
}

/// Fetch the follow-up transcript for a session
pub async fn get_transcript(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<Vec<ChatMessage>>> {
    let session = state.sessions.get(session_id)?;
    let session = session.lock().await;
    Ok(Json(session.messages().to_vec()))
}
