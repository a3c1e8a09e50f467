//! Rendering of store failures as `500 Internal Server Error` responses.
//!
//! The default policy returns the failure's structured cause verbatim, e.g.
//! `{"message":"Something went wrong!"}`. Deployments that must not leak
//! store details switch to [`FailurePolicy::Redact`], which always returns
//! `{"message":"Internal server error"}`. The cause is logged by the handler
//! under either policy.

use actix_web::HttpResponse;
use serde::Serialize;

use crate::domain::ports::UserPersistenceError;

/// Message used in place of the cause when failures are redacted.
pub const REDACTED_MESSAGE: &str = "Internal server error";

#[derive(Serialize)]
struct RedactedFailure {
    message: &'static str,
}

/// How a failed lookup is rendered to clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Serialise the failure's cause as the body.
    #[default]
    Expose,
    /// Replace the cause with [`REDACTED_MESSAGE`].
    Redact,
}

impl FailurePolicy {
    /// Choose the policy from the `redact_failures` setting.
    #[must_use]
    pub fn from_redact_flag(redact: bool) -> Self {
        if redact { Self::Redact } else { Self::Expose }
    }

    /// Build the 500 response for `error`.
    #[must_use]
    pub fn failure_response(self, error: &UserPersistenceError) -> HttpResponse {
        let mut builder = HttpResponse::InternalServerError();
        match self {
            Self::Expose => builder.json(error),
            Self::Redact => builder.json(RedactedFailure {
                message: REDACTED_MESSAGE,
            }),
        }
    }
}
