//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data`, so they only depend
//! on the lookup use-case port and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserLookupQuery;

use super::FailurePolicy;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Use-case answering `GET /users/{username}`.
    pub users: Arc<dyn UserLookupQuery>,
    /// How store failures are rendered in 500 bodies.
    pub failure_policy: FailurePolicy,
}

impl HttpState {
    /// Build state around a lookup port with the default failure policy.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use user_lookup::domain::UserLookupService;
    /// use user_lookup::domain::ports::FixtureUserRepository;
    /// use user_lookup::inbound::http::{FailurePolicy, HttpState};
    ///
    /// let service = UserLookupService::new(Arc::new(FixtureUserRepository::default()));
    /// let state = HttpState::new(Arc::new(service));
    /// assert_eq!(state.failure_policy, FailurePolicy::Expose);
    /// ```
    pub fn new(users: Arc<dyn UserLookupQuery>) -> Self {
        Self {
            users,
            failure_policy: FailurePolicy::default(),
        }
    }

    /// Replace the failure policy.
    #[must_use]
    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }
}
