//! User entity

use serde::{Deserialize, Serialize};

/// A registered user as persisted by the store.
///
/// The password is kept exactly as submitted. Hashing is a known gap of the
/// current design and must not be papered over here; the field is excluded
/// from serialization so it never leaves the process over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier, positive and unique, starting at 1
    id: i64,
    /// Email address, unique across all users
    email: String,
    /// Password as submitted - never exposed in serialization
    #[serde(skip_serializing, default)]
    password: String,
}

impl User {
    /// Create a user from store-assigned data
    pub fn new(id: i64, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}
