//! The user record stored in a collection file.

use serde::{Deserialize, Serialize};

/// One user entry. Field order matches the on-disk JSON layout.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct User {
    /// Identity key, unique within a collection.
    pub id: String,
    pub email: String,
    pub age: u64,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: u64) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }
}
