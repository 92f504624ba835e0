//! # User Store CLI
//!
//! This is the binary entry point for the `user-store` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`, including Go-style
//!   single-dash flags such as `-fileName users.json`.
//! - Running the requested operation and writing its result to stdout.
//! - Turning any terminal error into a non-zero exit status with the error
//!   printed on stderr.
//!
//! The record handling lives in the `user_store` library crate; the binary
//! is a thin wrapper around it.

mod cli;

use anyhow::Result;

fn main() -> Result<()> {
    let cli = cli::Cli::parse_args();
    cli.execute()
}
