//! User data model.
//!
//! Records are owned by the store. This service only reads them, so the
//! identifier and username are carried as opaque strings without format
//! validation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable user identifier as stored in the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// Unique lookup key for a user record.
///
/// Matching is exact: no trimming, case folding, or normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Wrap a raw username.
    pub fn new(username: impl Into<String>) -> Self {
        Self(username.into())
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<String> for Username {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Username {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

/// User record returned by lookups.
///
/// Serialises to exactly `{"id", "username", "email"}`; deserialisation
/// rejects any other field.
///
/// # Examples
/// ```
/// use user_lookup::domain::User;
///
/// let user = User::from_strings("123", "abc", "abc@gmail.com");
/// let json = serde_json::to_value(&user).expect("serialise user");
/// assert_eq!(json["username"], "abc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    id: UserId,
    username: Username,
    email: String,
}

impl User {
    /// Build a [`User`] from its typed components.
    pub fn new(id: UserId, username: Username, email: impl Into<String>) -> Self {
        Self {
            id,
            username,
            email: email.into(),
        }
    }

    /// Build a [`User`] from raw string values.
    pub fn from_strings(
        id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self::new(UserId::new(id), Username::new(username), email)
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Unique username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Contact email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}
