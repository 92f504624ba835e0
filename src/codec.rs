//! JSON encoding of collections and single records.
//!
//! A collection is stored as a compact JSON array of user objects. An empty
//! file is a valid, empty collection.

use crate::error::{Error, Result};
use crate::model::User;

/// Decode a stored collection.
///
/// Empty input yields an empty collection. Anything else must be a JSON
/// array of users.
pub fn decode(data: &[u8]) -> Result<Vec<User>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_slice(data).map_err(|source| Error::Decode {
        context: "stored records".to_string(),
        source,
    })
}

/// Encode a collection as a JSON array.
pub fn encode(users: &[User]) -> Result<Vec<u8>> {
    serde_json::to_vec(users).map_err(|source| Error::Encode { source })
}

/// Decode one incoming record from its JSON text.
pub fn decode_record(item: &str) -> Result<User> {
    serde_json::from_str(item).map_err(|source| Error::Decode {
        context: format!("{item:?}"),
        source,
    })
}

/// Encode one record as a JSON object.
pub fn encode_record(user: &User) -> Result<Vec<u8>> {
    serde_json::to_vec(user).map_err(|source| Error::Encode { source })
}
