//! Shared types and domain data for the Resilience Planner
//!
//! This crate contains types shared between the backend and any future
//! frontend components of the system.

pub mod counties;
pub mod models;
pub mod types;
pub mod validation;

pub use counties::*;
pub use models::*;
pub use types::*;
pub use validation::*;
