//! Domain primitives, use-cases and ports.
//!
//! Public surface:
//! - [`User`], [`UserId`], [`Username`]: the read-only user record.
//! - [`UserLookupService`]: implements the [`ports::UserLookupQuery`]
//!   use-case on top of a [`ports::UserRepository`].
//! - [`TraceId`]: per-request correlation identifier.

pub mod ports;
pub mod trace_id;
pub mod user;
mod user_lookup_service;

pub use self::ports::LookupOutcome;
pub use self::trace_id::TraceId;
pub use self::user::{User, UserId, Username};
pub use self::user_lookup_service::UserLookupService;
