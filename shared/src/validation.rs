//! Validation utilities for the Resilience Planner

use validator::ValidationError;

use crate::counties::is_known_county;

/// Validate that a county name is one of the 47 counties.
///
/// The geo lookup itself never fails (it falls back to Nairobi); this guard
/// rejects names the form could not have produced before they reach it.
pub fn validate_county(name: &str) -> Result<(), ValidationError> {
    if is_known_county(name) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_county"))
    }
}

/// Validate a follow-up question: non-blank and bounded.
pub fn validate_question(question: &str) -> Result<(), &'static str> {
    if question.trim().is_empty() {
        return Err("Question cannot be empty");
    }
    if question.chars().count() > 2000 {
        return Err("Question is too long");
    }
    Ok(())
}
