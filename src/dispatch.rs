//! # Command Dispatch
//!
//! Runs one validated [`Request`] to completion against its backing file:
//!
//! 1. **Load**: read the whole file (and decode it, except for `list`).
//! 2. **Execute**: apply the pure collection operation in memory.
//! 3. **Persist**: rewrite the whole file, for successful mutations only.
//! 4. **Emit**: write the result to the output sink.
//!
//! Conflicts on `add` and misses on `remove` are soft results. Their message
//! goes to the sink, nothing is persisted, and the call still succeeds with
//! an [`Outcome`] naming what happened. Validation, decode and I/O failures
//! are returned as errors.

use crate::codec;
use crate::collection;
use crate::error::{Error, Result};
use crate::model::User;
use crate::request::{Command, Request};
use crate::store::FileStore;
use log::{debug, info, warn};
use std::io::Write;

/// What a dispatched request did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The raw file contents were emitted.
    Listed { bytes: usize },
    /// The record was found and emitted.
    Found(User),
    /// No record carries the id; nothing changed.
    NotFound { id: String },
    /// The record was appended and the file rewritten.
    Added { id: String },
    /// A record with that id already existed; nothing changed.
    Conflict { id: String },
    /// Matching records were dropped and the file rewritten.
    Removed { id: String },
}

/// Execute `request`, writing its result to `writer`.
pub fn perform<W: Write>(request: &Request, writer: &mut W) -> Result<Outcome> {
    let store = FileStore::new(&request.file_name);
    let operation = request.command.operation();
    debug!(
        "performing {} on {} (rewrites file: {})",
        operation,
        store.path().display(),
        operation.is_mutating()
    );

    let outcome = match &request.command {
        Command::List => list(&store, writer)?,
        Command::FindById { id } => find_by_id(&store, id, writer)?,
        Command::Add { item } => add(&store, item, writer)?,
        Command::Remove { id } => remove(&store, id, writer)?,
    };

    writer.flush()?;
    Ok(outcome)
}

fn load(store: &FileStore) -> Result<Vec<User>> {
    let data = store.read()?;
    let users = codec::decode(&data)?;
    debug!("loaded {} record(s)", users.len());
    Ok(users)
}

fn persist(store: &FileStore, users: &[User]) -> Result<()> {
    let data = codec::encode(users)?;
    store.write(&data)
}

fn list<W: Write>(store: &FileStore, writer: &mut W) -> Result<Outcome> {
    let data = store.read()?;
    writer.write_all(&data)?;
    Ok(Outcome::Listed { bytes: data.len() })
}

fn find_by_id<W: Write>(store: &FileStore, id: &str, writer: &mut W) -> Result<Outcome> {
    let users = load(store)?;

    match collection::find_by_id(id, &users) {
        Some(user) => {
            writer.write_all(&codec::encode_record(user)?)?;
            Ok(Outcome::Found(user.clone()))
        }
        None => {
            warn!("no record with id {id}");
            Ok(Outcome::NotFound { id: id.to_string() })
        }
    }
}

fn add<W: Write>(store: &FileStore, item: &str, writer: &mut W) -> Result<Outcome> {
    let users = load(store)?;
    let user = codec::decode_record(item)?;
    let id = user.id.clone();

    match collection::insert(user, users) {
        Ok(users) => {
            persist(store, &users)?;
            info!("added record {} to {}", id, store.path().display());
            Ok(Outcome::Added { id })
        }
        Err(e) if e.is_soft() => {
            report_soft(writer, &e)?;
            Ok(Outcome::Conflict { id })
        }
        Err(e) => Err(e),
    }
}

fn remove<W: Write>(store: &FileStore, id: &str, writer: &mut W) -> Result<Outcome> {
    let users = load(store)?;

    match collection::remove_by_id(id, users) {
        Ok(users) => {
            persist(store, &users)?;
            info!("removed record {} from {}", id, store.path().display());
            Ok(Outcome::Removed { id: id.to_string() })
        }
        Err(e) if e.is_soft() => {
            report_soft(writer, &e)?;
            Ok(Outcome::NotFound { id: id.to_string() })
        }
        Err(e) => Err(e),
    }
}

fn report_soft<W: Write>(writer: &mut W, error: &Error) -> Result<()> {
    warn!("{error}");
    writeln!(writer, "{error}")?;
    Ok(())
}
