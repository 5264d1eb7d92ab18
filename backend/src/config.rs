//! Configuration management for the Resilience Planner
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with RSP_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Gemini generative-model configuration
    pub gemini: GeminiConfig,

    /// Open-Meteo weather API configuration
    pub weather: WeatherConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    /// API key; start-up fails when unset
    #[serde(default)]
    pub api_key: String,

    /// API base URL
    pub base_url: String,

    /// Pinned model name. When unset, the first listed model supporting
    /// generateContent is selected at start-up.
    pub model: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Forecast API base URL
    pub base_url: String,

    /// Network timeout for forecast requests, in seconds
    pub timeout_secs: u64,

    /// Forecast horizon in days
    pub forecast_days: u8,

    /// Timezone the daily forecast is resolved in
    pub timezone: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("RSP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default(
                "gemini.base_url",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("weather.base_url", "https://api.open-meteo.com/v1")?
            .set_default("weather.timeout_secs", 8)?
            .set_default("weather.forecast_days", 7)?
            .set_default("weather.timezone", "Africa/Nairobi")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (RSP_ prefix)
            .add_source(
                Environment::with_prefix("RSP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
