//! HTTP handlers for session lifecycle

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::AppState;

/// New session response
#[derive(Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

/// Open a new planning session
pub async fn create_session(
    State(state): State<AppState>,
) -> AppResult<Json<CreateSessionResponse>> {
    let session_id = state.sessions.create()?;
    tracing::debug!(%session_id, "Session created");
    Ok(Json(CreateSessionResponse { session_id }))
}

/// Session summary
#[derive(Serialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub has_plan: bool,
    pub message_count: usize,
}

/// Inspect a session
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<SessionSummary>> {
    let session = state.sessions.get(session_id)?;
    let session = session.lock().await;

    Ok(Json(SessionSummary {
        session_id: session.id,
        created_at: session.created_at,
        has_plan: session.report().is_some(),
        message_count: session.messages().len(),
    }))
}

/// Close a session and drop its state
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    state.sessions.remove(session_id)?;
    Ok(Json(()))
}
