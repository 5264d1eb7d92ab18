//! Domain models for the Resilience Planner

mod advisory;
mod weather;

pub use advisory::*;
pub use weather::*;
