//! HTTP handlers for plan generation

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::AppState;
use shared::{AdvisoryReport, FarmProfile};

/// Generated plan response
#[derive(Serialize)]
pub struct PlanResponse {
    pub session_id: Uuid,
    pub report: AdvisoryReport,
}

/// Generate a resilience plan for a farm profile.
///
/// A model failure surfaces as an error response and leaves any previously
/// generated plan untouched.
pub async fn generate_plan(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(profile): Json<FarmProfile>,
) -> AppResult<Json<PlanResponse>> {
    profile
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let session = state.sessions.get(session_id)?;
    let mut session = session.lock().await;
    let report = state.advisory.generate_plan(&mut session, &profile).await?;

    Ok(Json(PlanResponse { session_id, report }))
}

/// Fetch the current plan for a session
pub async fn get_current_plan(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<AdvisoryReport>> {
    let session = state.sessions.get(session_id)?;
    let session = session.lock().await;

    let report = session
        .report()
        .cloned()
        .ok_or_else(|| AppError::NotFound("Plan".to_string()))?;
    Ok(Json(report))
}
