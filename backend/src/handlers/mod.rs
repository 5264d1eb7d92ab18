//! HTTP handlers for the Resilience Planner API

pub mod chat;
pub mod counties;
pub mod health;
pub mod plan;
pub mod session;
pub mod weather;

pub use chat::*;
pub use counties::*;
pub use health::*;
pub use plan::*;
pub use session::*;
pub use weather::*;
