//! Store fixtures for integration tests.
//!
//! Compiled only with the `test-support` feature. The fixtures write through
//! the same pool and row models as the Diesel adapter so tests can seed the
//! `users` table, read it back and reset it between scenarios.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::User;
use crate::outbound::persistence::models::{NewUserRow, UserRow};
use crate::outbound::persistence::schema::users;
use crate::outbound::persistence::{DbPool, PoolError};

/// Failures raised by [`UserStoreFixture`].
#[derive(Debug, thiserror::Error)]
pub enum StoreFixtureError {
    /// No pooled connection was available.
    #[error(transparent)]
    Pool(#[from] PoolError),
    /// A fixture statement failed.
    #[error("store fixture statement failed: {0}")]
    Query(#[from] diesel::result::Error),
}

/// Seeds and inspects the `users` table.
#[derive(Clone)]
pub struct UserStoreFixture {
    pool: DbPool,
}

impl UserStoreFixture {
    /// Wrap a handle to the pool under test.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Replace the table contents with `records`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreFixtureError`] when the delete or insert fails.
    pub async fn set_users(&self, records: &[User]) -> Result<(), StoreFixtureError> {
        let mut conn = self.pool.get().await?;
        diesel::delete(users::table).execute(&mut conn).await?;
        if !records.is_empty() {
            let rows: Vec<NewUserRow<'_>> = records.iter().map(NewUserRow::from).collect();
            diesel::insert_into(users::table)
                .values(&rows)
                .execute(&mut conn)
                .await?;
        }
        Ok(())
    }

    /// Every stored record, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreFixtureError`] when the select fails.
    pub async fn users(&self) -> Result<Vec<User>, StoreFixtureError> {
        let mut conn = self.pool.get().await?;
        let rows = users::table
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load::<UserRow>(&mut conn)
            .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Remove every record.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreFixtureError`] when the delete fails.
    pub async fn reset(&self) -> Result<(), StoreFixtureError> {
        self.set_users(&[]).await
    }

    /// Release this fixture's pool handle.
    ///
    /// The pool closes its connections once the last handle is dropped.
    pub fn close(self) {
        drop(self.pool);
    }
}
