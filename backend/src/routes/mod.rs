//! Route definitions for the Resilience Planner API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Form reference data
        .route("/counties", get(handlers::list_counties))
        .route("/soil-types", get(handlers::list_soil_types))
        // Climate context per county
        .route("/weather/:county", get(handlers::get_climate_context))
        // Planning sessions
        .nest("/sessions", session_routes())
}

/// Session routes: lifecycle, plan generation, follow-up chat
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_session))
        .route(
            "/:session_id",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        .route(
            "/:session_id/plan",
            get(handlers::get_current_plan).post(handlers::generate_plan),
        )
        .route(
            "/:session_id/chat",
            get(handlers::get_transcript).post(handlers::ask_followup),
        )
}
