//! Shared test utilities for the CLI E2E tests.
//!
//! This module provides a temp-directory fixture holding a users file,
//! sample records, and a helper that builds the command for the binary.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_users(records::BOTH);
//!     fixture.command().args(["-operation", "list"]).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Name of the users file created inside each fixture.
pub const USERS_FILE: &str = "users.json";

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::records;
    pub use super::TestFixture;
}

/// Sample records as the binary encodes them.
#[allow(dead_code)]
pub mod records {
    pub const ONE: &str = r#"{"id":"1","email":"a@b.com","age":23}"#;
    pub const TWO: &str = r#"{"id":"2","email":"c@d.com","age":41}"#;

    /// Collection holding `ONE`.
    pub const ONLY_ONE: &str = r#"[{"id":"1","email":"a@b.com","age":23}]"#;

    /// Collection holding `ONE` then `TWO`.
    pub const BOTH: &str =
        r#"[{"id":"1","email":"a@b.com","age":23},{"id":"2","email":"c@d.com","age":41}]"#;
}

/// A temporary directory that may hold a users file.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write the users file with the given content.
    pub fn with_users(self, content: &str) -> Self {
        self.temp_dir
            .child(USERS_FILE)
            .write_str(content)
            .expect("Failed to write users file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the users file.
    pub fn users_path(&self) -> PathBuf {
        self.temp_dir.path().join(USERS_FILE)
    }

    /// Current contents of the users file.
    pub fn users(&self) -> String {
        std::fs::read_to_string(self.users_path()).expect("Failed to read users file")
    }

    /// Create a command running in this fixture's directory, isolated from
    /// the caller's environment.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("user-store");
        cmd.current_dir(self.path())
            .env_remove(user_store::defaults::FILE_NAME_ENV)
            .env_remove("RUST_LOG");
        cmd
    }

    /// Create a command already pointed at the users file.
    pub fn command_with_file(&self) -> assert_cmd::Command {
        let mut cmd = self.command();
        cmd.arg("-fileName").arg(self.users_path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
        assert!(!fixture.users_path().exists());
    }

    #[test]
    fn test_fixture_with_users() {
        let fixture = TestFixture::new().with_users(records::BOTH);
        assert_eq!(fixture.users(), records::BOTH);
    }

    #[test]
    fn test_records_are_valid_json() {
        for record in [records::ONE, records::TWO, records::ONLY_ONE, records::BOTH] {
            serde_json::from_str::<serde_json::Value>(record).expect("Record should be valid JSON");
        }
    }
}
