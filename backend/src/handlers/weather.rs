//! HTTP handlers for the climate-context panel

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::services::weather::{format_climate_context, WeatherOutlook};
use crate::AppState;
use shared::ForecastSnapshot;

/// Climate context for a county
#[derive(Serialize)]
pub struct ClimateContextResponse {
    pub county: String,

    /// False when the live fetch failed and the generic outlook is shown
    pub live: bool,

    pub narrative: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<ForecastSnapshot>,
}

/// Fetch the climate context for a county.
///
/// Weather problems degrade to the fixed 2026 outlook; this endpoint never
/// fails because of the upstream weather service.
pub async fn get_climate_context(
    State(state): State<AppState>,
    Path(county): Path<String>,
) -> Json<ClimateContextResponse> {
    let outlook = state.weather.current_outlook(&county).await;
    let narrative = format_climate_context(&county, &outlook);
    let live = outlook.is_live();

    let snapshot = match outlook {
        WeatherOutlook::Live(snapshot) => Some(snapshot),
        WeatherOutlook::Unavailable => None,
    };

    Json(ClimateContextResponse {
        county,
        live,
        narrative,
        snapshot,
    })
}
