//! OpenAPI schema wrappers for domain types.
//!
//! Domain types do not derive `ToSchema`; these mirrors carry the OpenAPI
//! definitions at the adapter edge instead.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Stable user identifier.
    #[schema(example = "123")]
    id: String,
    /// Unique username.
    #[schema(example = "abc")]
    username: String,
    /// Contact email address.
    #[schema(example = "abc@gmail.com")]
    email: String,
}

/// OpenAPI schema for the body of a failed lookup.
#[derive(ToSchema)]
#[schema(as = crate::domain::ports::UserPersistenceError)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FailureSchema {
    /// Failure cause, or a fixed message when failures are redacted.
    #[schema(example = "Something went wrong!")]
    message: String,
}
