//! # Invocation Configuration
//!
//! The CLI layer collects raw flag values into an [`Arguments`] record. That
//! record is validated into a typed [`Request`] before any file is touched.
//!
//! Validation order is fixed: the operation first, then the file name, then
//! the field the chosen operation needs. Empty values count as missing.

use crate::error::{Error, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Raw flag values for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    pub file_name: Option<String>,
    pub operation: Option<String>,
    pub item: Option<String>,
    pub id: Option<String>,
}

/// The four supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Add,
    FindById,
    Remove,
}

impl Operation {
    /// Name as written on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Add => "add",
            Operation::FindById => "findById",
            Operation::Remove => "remove",
        }
    }

    /// Whether the operation rewrites the backing file.
    pub fn is_mutating(self) -> bool {
        matches!(self, Operation::Add | Operation::Remove)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "list" => Ok(Operation::List),
            "add" => Ok(Operation::Add),
            "findById" => Ok(Operation::FindById),
            "remove" => Ok(Operation::Remove),
            other => Err(Error::validation(format!(
                "Operation {other} not allowed!"
            ))),
        }
    }
}

/// What a validated request asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add { item: String },
    FindById { id: String },
    Remove { id: String },
}

impl Command {
    pub fn operation(&self) -> Operation {
        match self {
            Command::List => Operation::List,
            Command::Add { .. } => Operation::Add,
            Command::FindById { .. } => Operation::FindById,
            Command::Remove { .. } => Operation::Remove,
        }
    }
}

/// A fully validated invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub file_name: PathBuf,
    pub command: Command,
}

impl Arguments {
    /// Validate the raw values into a [`Request`].
    pub fn validate(self) -> Result<Request> {
        let operation: Operation = present(self.operation)
            .ok_or_else(|| Error::validation("-operation flag has to be specified"))?
            .parse()?;

        let file_name = present(self.file_name)
            .ok_or_else(|| Error::validation("-fileName flag has to be specified"))?;

        let command = match operation {
            Operation::List => Command::List,
            Operation::Add => Command::Add {
                item: present(self.item)
                    .ok_or_else(|| Error::validation("-item flag has to be specified"))?,
            },
            Operation::FindById => Command::FindById {
                id: required_id(self.id)?,
            },
            Operation::Remove => Command::Remove {
                id: required_id(self.id)?,
            },
        };

        Ok(Request {
            file_name: PathBuf::from(file_name),
            command,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn required_id(id: Option<String>) -> Result<String> {
    present(id).ok_or_else(|| Error::validation("-id flag has to be specified"))
}

/// Strip the `«` and `»` characters that sneak in when values are pasted
/// from formatted documents.
pub fn sanitize_arg(arg: &str) -> String {
    arg.chars().filter(|c| !matches!(c, '«' | '»')).collect()
}
