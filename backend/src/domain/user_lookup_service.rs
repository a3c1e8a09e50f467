//! User lookup domain service.
//!
//! Implements the [`UserLookupQuery`] driving port on top of a
//! [`UserRepository`]. The repository is called exactly once per lookup and
//! its answer is folded into a [`LookupOutcome`] without retries.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Username;
use crate::domain::ports::{LookupOutcome, UserLookupQuery, UserRepository};

/// Lookup service backed by a user repository.
pub struct UserLookupService<R: ?Sized> {
    user_repo: Arc<R>,
}

impl<R: ?Sized> Clone for UserLookupService<R> {
    fn clone(&self) -> Self {
        Self {
            user_repo: Arc::clone(&self.user_repo),
        }
    }
}

impl<R: ?Sized> UserLookupService<R> {
    /// Create a new lookup service over the given repository.
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> UserLookupQuery for UserLookupService<R>
where
    R: UserRepository + ?Sized,
{
    async fn lookup(&self, username: &Username) -> LookupOutcome {
        LookupOutcome::from(self.user_repo.find_by_username(username).await)
    }
}
