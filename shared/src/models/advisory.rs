//! Farm profile, advisory report, and conversation models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{ChatRole, SoilType};

/// Farm details supplied by the operator for one plan generation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FarmProfile {
    /// County where the farm is (one of the 47)
    #[validate(custom = "crate::validation::validate_county")]
    pub county: String,

    /// Nearest town / ward / market
    #[validate(length(min = 1, max = 120))]
    pub locality: String,

    /// Soil category
    pub soil_type: SoilType,

    /// Currently planted crop
    #[validate(length(min = 1, max = 120))]
    pub planted_crop: String,

    /// True for a short bullet plan, false for the full detailed strategy
    #[serde(default)]
    pub quick_plan: bool,
}

impl Default for FarmProfile {
    /// The pre-filled form values.
    fn default() -> Self {
        Self {
            county: "Kiambu".to_string(),
            locality: "Ruiru".to_string(),
            soil_type: SoilType::RedVolcanic,
            planted_crop: "Maize".to_string(),
            quick_plan: false,
        }
    }
}

/// A generated resilience plan, split into the short rundown and the full
/// report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryReport {
    /// Marker-delimited summary block; empty when the model skipped the
    /// markers
    pub rundown: String,

    /// Everything after the rundown block
    pub full_report: String,

    pub generated_at: DateTime<Utc>,
}

impl AdvisoryReport {
    pub fn new(rundown: impl Into<String>, full_report: impl Into<String>) -> Self {
        Self {
            rundown: rundown.into(),
            full_report: full_report.into(),
            generated_at: Utc::now(),
        }
    }

    /// The plan text used as chat context: rundown and report joined by a
    /// blank line, or the report alone when the rundown is empty.
    pub fn combined_text(&self) -> String {
        if self.rundown.is_empty() {
            self.full_report.clone()
        } else {
            format!("{}\n\n{}", self.rundown, self.full_report)
        }
    }
}

/// One transcript entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}
