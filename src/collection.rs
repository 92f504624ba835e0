//! Pure operations over an in-memory collection.
//!
//! All lookups are linear scans. The functions never touch the filesystem;
//! the dispatcher loads and persists around them.

use crate::codec;
use crate::error::{Error, Result};
use crate::model::User;

/// Whether any record carries `id`.
pub fn exists(id: &str, users: &[User]) -> bool {
    users.iter().any(|user| user.id == id)
}

/// The first record carrying `id`, if any.
pub fn find_by_id<'a>(id: &str, users: &'a [User]) -> Option<&'a User> {
    users.iter().find(|user| user.id == id)
}

/// Decode `item` and append it to the collection.
///
/// Fails with `Error::Decode` when the item is malformed and with
/// `Error::Conflict` when its id is already present. On success the new
/// record is last and the previous order is kept.
pub fn add(item: &str, users: Vec<User>) -> Result<Vec<User>> {
    insert(codec::decode_record(item)?, users)
}

/// Append an already decoded record, failing with `Error::Conflict` when its
/// id is already present.
pub fn insert(user: User, mut users: Vec<User>) -> Result<Vec<User>> {
    if exists(&user.id, &users) {
        return Err(Error::Conflict { id: user.id });
    }

    users.push(user);
    Ok(users)
}

/// Drop every record carrying `id`.
///
/// Fails with `Error::NotFound` when no record matches.
pub fn remove_by_id(id: &str, users: Vec<User>) -> Result<Vec<User>> {
    if !exists(id, &users) {
        return Err(Error::NotFound { id: id.to_string() });
    }

    Ok(users.into_iter().filter(|user| user.id != id).collect())
}
