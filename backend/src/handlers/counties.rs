//! Form reference data: counties and soil types

use axum::Json;
use serde::Serialize;

use shared::{SoilType, COUNTIES};

/// A county entry for the farm form
#[derive(Serialize)]
pub struct CountyEntry {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// List the 47 counties with their weather lookup points
pub async fn list_counties() -> Json<Vec<CountyEntry>> {
    Json(
        COUNTIES
            .iter()
            .map(|county| CountyEntry {
                name: county.name,
                latitude: county.latitude,
                longitude: county.longitude,
            })
            .collect(),
    )
}

/// A soil category option
#[derive(Serialize)]
pub struct SoilTypeEntry {
    pub value: SoilType,
    pub label: &'static str,
}

/// List the selectable soil categories
pub async fn list_soil_types() -> Json<Vec<SoilTypeEntry>> {
    Json(
        SoilType::ALL
            .iter()
            .map(|soil| SoilTypeEntry {
                value: *soil,
                label: soil.label(),
            })
            .collect(),
    )
}
