//! # User Store Library
//!
//! This library maintains a collection of user records persisted as a single
//! JSON document. It backs the `user-store` command-line tool, which lists,
//! adds, finds and removes records by id.
//!
//! ## Quick Example
//!
//! ```
//! use user_store::collection;
//! use user_store::model::User;
//!
//! let users = vec![User::new("1", "a@b.com", 23)];
//! let users = collection::add(r#"{"id":"2","email":"c@d.com","age":41}"#, users).unwrap();
//!
//! assert!(collection::exists("2", &users));
//! assert_eq!(collection::find_by_id("1", &users).map(|u| u.age), Some(23));
//! assert!(collection::add(r#"{"id":"1","email":"x@y.com","age":1}"#, users).is_err());
//! ```
//!
//! ## Core Concepts
//!
//! - **Model (`model`)**: the `User` record (id, email, age). Ids are unique
//!   within a collection.
//! - **File Store (`store`)**: whole-file reads (creating missing files) and
//!   whole-file rewrites. No locking; the last writer wins.
//! - **Codec (`codec`)**: JSON encoding of collections and single records.
//!   An empty file is an empty collection.
//! - **Collection (`collection`)**: pure lookups and mutations by id.
//! - **Request (`request`)**: the explicit configuration record and its
//!   validation into a typed request.
//! - **Dispatch (`dispatch`)**: runs one request against its file and writes
//!   the result to an output sink.
//!
//! ## Execution Flow
//!
//! Every invocation starts from the file contents, with no state carried
//! between runs:
//!
//! 1.  **Validate**: operation, then file name, then the operation's field.
//! 2.  **Load**: read and decode the whole file.
//! 3.  **Execute**: apply the in-memory operation.
//! 4.  **Persist**: rewrite the whole file after a successful mutation.
//! 5.  **Emit**: write the result to the sink.

pub mod codec;
pub mod collection;
pub mod defaults;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod request;
pub mod store;

#[cfg(test)]
mod collection_proptest;
