//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{User, Username};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Read access to stored user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch the first user whose username exactly equals `username`.
    ///
    /// Returns `Ok(None)` when no record matches. Connectivity and query
    /// failures are returned as errors and never folded into `None`.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError>;
}

/// In-memory repository for tests and store-free wiring.
///
/// # Examples
/// ```
/// use user_lookup::domain::ports::{FixtureUserRepository, UserRepository};
/// use user_lookup::domain::{User, Username};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = FixtureUserRepository::new(vec![User::from_strings("1", "ada", "ada@example.com")]);
/// let found = repo.find_by_username(&Username::from("ada")).await.unwrap();
/// assert!(found.is_some());
/// # });
/// ```
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default, Clone)]
pub struct FixtureUserRepository {
    users: Vec<User>,
}

#[cfg(any(test, feature = "test-support"))]
impl FixtureUserRepository {
    /// Create a repository holding `users` in insertion order.
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[cfg(any(test, feature = "test-support"))]
#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError> {
        Ok(self
            .users
            .iter()
            .find(|user| user.username() == username)
            .cloned())
    }
}
