//! User lookup service library.
//!
//! Hexagonal layout: [`domain`] holds the record types, the lookup use-case
//! and its ports; [`outbound`] implements the repository port with Diesel;
//! [`inbound`] exposes it over HTTP.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(feature = "test-support")]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
