//! HTTP inbound adapter exposing the lookup endpoint and health probes.

pub mod failure;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;

pub use failure::FailurePolicy;
pub use health::HealthState;
pub use state::HttpState;
