//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Soil categories offered on the farm form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    RedVolcanic,
    BlackCotton,
    SandyLoamy,
}

impl SoilType {
    /// All selectable categories, in form order.
    pub const ALL: [SoilType; 3] = [
        SoilType::RedVolcanic,
        SoilType::BlackCotton,
        SoilType::SandyLoamy,
    ];

    /// Human-readable label, as shown on the form and embedded in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            SoilType::RedVolcanic => "Red Volcanic",
            SoilType::BlackCotton => "Black Cotton",
            SoilType::SandyLoamy => "Sandy/Loamy",
        }
    }
}

/// Role tag on a conversation entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}
