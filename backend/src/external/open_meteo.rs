//! Open-Meteo forecast client
//!
//! Fetches current conditions and a daily forecast for one point. Open-Meteo
//! is free and unauthenticated; requests carry a bounded timeout and every
//! failure maps to `WeatherServiceUnavailable`.

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};
use shared::{ForecastSnapshot, GpsCoordinates};

/// Open-Meteo API client
#[derive(Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
    forecast_days: u8,
    timezone: String,
}

/// Open-Meteo forecast response body
#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    current: Option<OpenMeteoCurrent>,
    daily: Option<OpenMeteoDaily>,
}

#[derive(Debug, Default, Deserialize)]
struct OpenMeteoCurrent {
    temperature_2m: Option<f64>,
    relative_humidity_2m: Option<f64>,
    precipitation: Option<f64>,
    weather_code: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
struct OpenMeteoDaily {
    temperature_2m_max: Option<Vec<Option<f64>>>,
    temperature_2m_min: Option<Vec<Option<f64>>>,
    precipitation_sum: Option<Vec<Option<f64>>>,
}

impl OpenMeteoClient {
    /// Create a new OpenMeteoClient
    pub fn new(config: &WeatherConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            forecast_days: config.forecast_days,
            timezone: config.timezone.clone(),
        }
    }

    /// Fetch current conditions and the daily forecast for a point
    pub async fn fetch_forecast(&self, location: GpsCoordinates) -> AppResult<ForecastSnapshot> {
        let url = format!("{}/forecast", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                (
                    "current",
                    "temperature_2m,relative_humidity_2m,precipitation,weather_code".to_string(),
                ),
                (
                    "daily",
                    "temperature_2m_max,temperature_2m_min,precipitation_sum".to_string(),
                ),
                ("timezone", self.timezone.clone()),
                ("forecast_days", self.forecast_days.to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Weather API request failed: {}", e);
                AppError::WeatherServiceUnavailable
            })?;

        if !response.status().is_success() {
            tracing::warn!("Weather API returned {}", response.status());
            return Err(AppError::WeatherServiceUnavailable);
        }

        let data: OpenMeteoResponse = response.json().await.map_err(|e| {
            tracing::warn!("Failed to parse weather response: {}", e);
            AppError::WeatherServiceUnavailable
        })?;

        Ok(convert_response(location, data))
    }
}

/// Convert an Open-Meteo body into a snapshot, defaulting the fields the
/// service omitted.
fn convert_response(location: GpsCoordinates, data: OpenMeteoResponse) -> ForecastSnapshot {
    let current = data.current.unwrap_or_default();
    let daily = data.daily.unwrap_or_default();

    ForecastSnapshot {
        location,
        fetched_at: Utc::now(),
        temperature_c: current.temperature_2m,
        humidity_percent: current.relative_humidity_2m,
        precipitation_mm: current.precipitation.unwrap_or(0.0),
        weather_code: current.weather_code.unwrap_or(0),
        daily_high_c: daily.temperature_2m_max.unwrap_or_else(|| vec![None]),
        daily_low_c: daily.temperature_2m_min.unwrap_or_else(|| vec![None]),
        daily_precipitation_mm: daily.precipitation_sum.unwrap_or_else(|| vec![Some(0.0)]),
    }
}

/// Turn an Open-Meteo weather code into a short readable label.
pub fn weather_code_label(code: i32) -> &'static str {
    match code {
        0 => "Clear",
        1..=3 => "Mainly clear / partly cloudy",
        45 | 48 => "Foggy",
        51 | 53 | 55 | 56 | 57 => "Drizzle",
        61 | 63 | 65 | 66 | 67 => "Rain",
        80..=82 => "Rain showers",
        95 | 96 | 99 => "Thunderstorm",
        _ => "Variable",
    }
}
