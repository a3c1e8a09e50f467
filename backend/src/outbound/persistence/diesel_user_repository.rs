//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Each lookup checks a connection out of the injected [`DbPool`], runs a
//! single `SELECT ... WHERE username = $1 LIMIT 1` and returns the row, if
//! any, as a domain [`User`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, Username};

use super::models::UserRow;
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository over a handle to the shared pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    debug!(%error, "user repository checkout failed");
    UserPersistenceError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(_, info) => UserPersistenceError::query(info.message()),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        other => UserPersistenceError::query(other.to_string()),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .filter(users::username.eq(username.as_ref()))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(User::from))
    }
}

#[cfg(test)]
mod tests {
    //! Error-mapping coverage; query behaviour is exercised against embedded
    //! PostgreSQL in `tests/diesel_user_repository.rs`.

    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    fn database_error(kind: DatabaseErrorKind, message: &str) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(message.to_owned()))
    }

    #[rstest]
    fn checkout_failures_are_connection_errors() {
        let error = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(error, UserPersistenceError::connection("timed out"));
    }

    #[rstest]
    fn closed_connections_are_connection_errors() {
        let error = map_diesel_error(database_error(
            DatabaseErrorKind::ClosedConnection,
            "server closed the connection",
        ));
        assert!(matches!(error, UserPersistenceError::Connection { .. }));
    }

    #[rstest]
    #[case(DatabaseErrorKind::Unknown, "relation \"users\" does not exist")]
    #[case(DatabaseErrorKind::SerializationFailure, "could not serialize access")]
    fn database_errors_keep_server_message(#[case] kind: DatabaseErrorKind, #[case] message: &str) {
        let error = map_diesel_error(database_error(kind, message));
        assert_eq!(error, UserPersistenceError::query(message));
    }

    #[rstest]
    fn other_diesel_errors_are_query_errors() {
        let error = map_diesel_error(DieselError::RollbackTransaction);
        assert!(matches!(error, UserPersistenceError::Query { .. }));
    }
}
