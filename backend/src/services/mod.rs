//! Business logic services for the Resilience Planner

pub mod advisory;
pub mod prompt;
pub mod session;
pub mod weather;

pub use advisory::AdvisoryService;
pub use session::{PlanSession, SessionStore};
pub use weather::{WeatherOutlook, WeatherService};
