//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use user_lookup::domain::ports::UserRepository;
use user_lookup::inbound::http::FailurePolicy;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) user_repository: Arc<dyn UserRepository>,
    pub(crate) failure_policy: FailurePolicy,
}

impl ServerConfig {
    /// Configuration for a server on `bind_addr` answering lookups from
    /// `user_repository`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, user_repository: Arc<dyn UserRepository>) -> Self {
        Self {
            bind_addr,
            user_repository,
            failure_policy: FailurePolicy::default(),
        }
    }

    /// Choose how store failures are rendered.
    #[must_use]
    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }
}
