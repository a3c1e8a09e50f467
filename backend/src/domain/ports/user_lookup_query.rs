//! Driving port for looking up a single user by username.
//!
//! Inbound adapters call this port and translate the returned
//! [`LookupOutcome`] into their own protocol without touching persistence.

use async_trait::async_trait;

use crate::domain::{User, Username};

use super::UserPersistenceError;

/// Result of a username lookup.
///
/// Absence and failure are separate variants so adapters can never mistake a
/// failed query for a missing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// A record with the requested username exists.
    Found(User),
    /// No record has the requested username.
    NotFound,
    /// The store could not answer the query.
    Failed(UserPersistenceError),
}

impl From<Result<Option<User>, UserPersistenceError>> for LookupOutcome {
    fn from(value: Result<Option<User>, UserPersistenceError>) -> Self {
        match value {
            Ok(Some(user)) => Self::Found(user),
            Ok(None) => Self::NotFound,
            Err(error) => Self::Failed(error),
        }
    }
}

/// Domain use-case port for fetching a user by username.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserLookupQuery: Send + Sync {
    /// Look up the user whose username exactly equals `username`.
    async fn lookup(&self, username: &Username) -> LookupOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn found_records_map_to_found() {
        let user = User::from_strings("123", "abc", "abc@gmail.com");
        let outcome = LookupOutcome::from(Ok(Some(user.clone())));
        assert_eq!(outcome, LookupOutcome::Found(user));
    }

    #[rstest]
    fn missing_records_map_to_not_found() {
        assert_eq!(LookupOutcome::from(Ok(None)), LookupOutcome::NotFound);
    }

    #[rstest]
    #[case(UserPersistenceError::connection("refused"))]
    #[case(UserPersistenceError::query("bad query"))]
    fn errors_map_to_failed(#[case] error: UserPersistenceError) {
        assert_eq!(
            LookupOutcome::from(Err(error.clone())),
            LookupOutcome::Failed(error)
        );
    }
}
