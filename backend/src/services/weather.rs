//! Weather context service
//!
//! Resolves a county to its lookup point, fetches the forecast, and renders
//! the climate-context narrative. A failed fetch degrades to the fixed 2026
//! outlook instead of an error.

use crate::config::WeatherConfig;
use crate::external::open_meteo::{weather_code_label, OpenMeteoClient};
use shared::{county_coordinates, ForecastSnapshot};

/// Result of a weather lookup: live data or an explicit "no data" marker
#[derive(Debug, Clone)]
pub enum WeatherOutlook {
    Live(ForecastSnapshot),
    Unavailable,
}

impl WeatherOutlook {
    pub fn is_live(&self) -> bool {
        matches!(self, WeatherOutlook::Live(_))
    }
}

/// Weather service for the climate-context panel
#[derive(Clone)]
pub struct WeatherService {
    client: OpenMeteoClient,
}

impl WeatherService {
    /// Create a new WeatherService
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            client: OpenMeteoClient::new(config),
        }
    }

    /// Fetch the current outlook for a county. Never fails: any fetch
    /// problem yields `WeatherOutlook::Unavailable`.
    pub async fn current_outlook(&self, county: &str) -> WeatherOutlook {
        let location = county_coordinates(county);
        match self.client.fetch_forecast(location).await {
            Ok(snapshot) => WeatherOutlook::Live(snapshot),
            Err(e) => {
                tracing::warn!("Weather unavailable for {}: {}", county, e);
                WeatherOutlook::Unavailable
            }
        }
    }
}

/// Render the climate-context narrative for a county.
pub fn format_climate_context(county: &str, outlook: &WeatherOutlook) -> String {
    match outlook {
        WeatherOutlook::Live(snapshot) => format!(
            "Now ({county}): {temp}, {label} · Rain: {rain} mm · Humidity: {humidity}\n\
             7-day: Highs ~{high}, Lows ~{low} · Total rain: ~{week:.0} mm\n\
             2026 outlook: Heavy rains/floods then dry spells — plan for both.\n\
             Challenge: Unpredictable weather; many traditional crops at risk.",
            county = county,
            temp = format_temperature(snapshot.temperature_c),
            label = weather_code_label(snapshot.weather_code),
            rain = snapshot.precipitation_mm,
            humidity = format_humidity(snapshot.humidity_percent),
            high = format_temperature(snapshot.first_day_high()),
            low = format_temperature(snapshot.first_day_low()),
            week = snapshot.week_precipitation_mm(),
        ),
        WeatherOutlook::Unavailable => format!(
            "2026 outlook: Heavy rains/floods expected, then dry spells.\n\
             Region: {county}, Kenya (all 47 counties).\n\
             Challenge: Unpredictable weather; many traditional crops at risk.",
            county = county
        ),
    }
}

fn format_temperature(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}°C", v))
        .unwrap_or_else(|| "—".to_string())
}

fn format_humidity(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.0}%", v))
        .unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::GpsCoordinates;

    fn sample_snapshot() -> ForecastSnapshot {
        ForecastSnapshot {
            location: GpsCoordinates::new(-1.17, 36.82),
            fetched_at: Utc::now(),
            temperature_c: Some(21.4),
            humidity_percent: Some(68.0),
            precipitation_mm: 1.2,
            weather_code: 61,
            daily_high_c: vec![Some(24.1), Some(23.0)],
            daily_low_c: vec![Some(12.3), Some(11.8)],
            daily_precipitation_mm: vec![Some(3.0), Some(4.0)],
        }
    }

    #[test]
    fn test_live_narrative_mentions_conditions() {
        let narrative =
            format_climate_context("Kiambu", &WeatherOutlook::Live(sample_snapshot()));
        assert!(narrative.contains("Now (Kiambu): 21.4°C, Rain"));
        assert!(narrative.contains("Humidity: 68%"));
        assert!(narrative.contains("Highs ~24.1°C"));
        assert!(narrative.contains("Total rain: ~7 mm"));
        assert!(narrative.contains("Heavy rains/floods then dry spells"));
    }

    #[test]
    fn test_live_narrative_handles_missing_values() {
        let snapshot = ForecastSnapshot {
            temperature_c: None,
            humidity_percent: None,
            daily_high_c: vec![None],
            daily_low_c: vec![None],
            ..sample_snapshot()
        };
        let narrative = format_climate_context("Wajir", &WeatherOutlook::Live(snapshot));
        assert!(narrative.contains("Now (Wajir): —, Rain"));
        assert!(narrative.contains("Humidity: —"));
        assert!(narrative.contains("Highs ~—"));
    }

    #[test]
    fn test_fallback_narrative() {
        let narrative = format_climate_context("Turkana", &WeatherOutlook::Unavailable);
        assert!(narrative.contains("Region: Turkana, Kenya"));
        assert!(narrative.contains("Heavy rains/floods expected, then dry spells"));
        assert!(!narrative.contains("Now ("));
        assert!(!WeatherOutlook::Unavailable.is_live());
    }
}
