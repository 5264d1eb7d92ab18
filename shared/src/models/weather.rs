//! Weather data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// Result of one forecast fetch
///
/// Daily arrays carry whatever horizon the service returned; entries may be
/// null when the service had no value for a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    pub location: GpsCoordinates,
    pub fetched_at: DateTime<Utc>,

    /// Current air temperature, when the service reported one
    pub temperature_c: Option<f64>,

    /// Current relative humidity
    pub humidity_percent: Option<f64>,

    /// Current precipitation; zero when the service omitted the field
    pub precipitation_mm: f64,

    /// Open-Meteo weather code; zero when omitted
    pub weather_code: i32,

    /// Daily maximum temperatures over the forecast horizon
    pub daily_high_c: Vec<Option<f64>>,

    /// Daily minimum temperatures over the forecast horizon
    pub daily_low_c: Vec<Option<f64>>,

    /// Daily precipitation totals over the forecast horizon
    pub daily_precipitation_mm: Vec<Option<f64>>,
}

impl ForecastSnapshot {
    /// Today's forecast high.
    pub fn first_day_high(&self) -> Option<f64> {
        self.daily_high_c.first().copied().flatten()
    }

    /// Today's forecast low.
    pub fn first_day_low(&self) -> Option<f64> {
        self.daily_low_c.first().copied().flatten()
    }

    /// Total precipitation over the horizon: sum of the non-null daily
    /// entries, however many the service returned. No imputation.
    pub fn week_precipitation_mm(&self) -> f64 {
        self.daily_precipitation_mm.iter().flatten().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counties::NAIROBI_FALLBACK;

    fn snapshot(daily_precipitation_mm: Vec<Option<f64>>) -> ForecastSnapshot {
        ForecastSnapshot {
            location: NAIROBI_FALLBACK,
            fetched_at: Utc::now(),
            temperature_c: Some(21.0),
            humidity_percent: Some(70.0),
            precipitation_mm: 0.0,
            weather_code: 0,
            daily_high_c: vec![Some(24.0), None],
            daily_low_c: vec![None, Some(12.0)],
            daily_precipitation_mm,
        }
    }

    #[test]
    fn test_week_precipitation_skips_null_entries() {
        let snapshot = snapshot(vec![Some(1.5), None, Some(2.5), None]);
        assert_eq!(snapshot.week_precipitation_mm(), 4.0);
    }

    #[test]
    fn test_week_precipitation_of_empty_array() {
        assert_eq!(snapshot(vec![]).week_precipitation_mm(), 0.0);
        assert_eq!(snapshot(vec![None, None]).week_precipitation_mm(), 0.0);
    }

    #[test]
    fn test_first_day_helpers() {
        let snapshot = snapshot(vec![Some(0.0)]);
        assert_eq!(snapshot.first_day_high(), Some(24.0));
        assert_eq!(snapshot.first_day_low(), None);
    }
}
