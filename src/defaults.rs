//! Default values for user-store configuration.
//!
//! This module keeps the names and defaults shared by the binary and the
//! tests in one place.

/// Environment variable that supplies `fileName` when the flag is omitted.
pub const FILE_NAME_ENV: &str = "USER_STORE_FILE";

/// Log level used when neither `--log-level` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
