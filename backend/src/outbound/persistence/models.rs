//! Diesel row structs. These never leave the persistence layer.

use diesel::prelude::*;

use crate::domain::User;

use super::schema::users;

/// Row read from the `users` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::from_strings(row.id, row.username, row.email)
    }
}

/// Row written to the `users` table by the store fixtures.
#[cfg(feature = "test-support")]
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: &'a str,
    pub username: &'a str,
    pub email: &'a str,
}

#[cfg(feature = "test-support")]
impl<'a> From<&'a User> for NewUserRow<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: user.id().as_ref(),
            username: user.username().as_ref(),
            email: user.email(),
        }
    }
}
