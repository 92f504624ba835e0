//! CLI argument parsing and command dispatch

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use std::ffi::OsString;
use std::io;

use user_store::defaults::{DEFAULT_LOG_LEVEL, FILE_NAME_ENV};
use user_store::dispatch;
use user_store::request::{sanitize_arg, Arguments};

/// Flags that may be written Go-style with a single leading dash.
const FLAG_NAMES: [&str; 4] = ["fileName", "operation", "item", "id"];

/// User Store - Maintain user records in a JSON file
#[derive(Parser, Debug)]
#[command(name = "user-store")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// JSON file that stores the user records
    #[arg(long = "fileName", value_name = "FILE", env = FILE_NAME_ENV)]
    file_name: Option<String>,

    /// Operation to perform: list, add, findById or remove
    #[arg(long, value_name = "OPERATION")]
    operation: Option<String>,

    /// User record to add, as JSON (e.g. '{"id":"1","email":"a@b.com","age":23}')
    #[arg(long, value_name = "JSON", allow_hyphen_values = true)]
    item: Option<String>,

    /// Id of the user to find or remove
    #[arg(long, value_name = "ID", allow_hyphen_values = true)]
    id: Option<String>,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

impl Cli {
    /// Parse the process arguments, accepting single-dash flags.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_flags(std::env::args_os()))
    }

    /// Execute the requested operation against stdout
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level)?;

        let arguments = self.arguments();
        debug!("arguments: {:?}", arguments);

        let request = arguments.validate()?;
        let stdout = io::stdout();
        let outcome = dispatch::perform(&request, &mut stdout.lock())?;
        debug!("outcome: {:?}", outcome);

        Ok(())
    }

    /// Collect the raw flag values into the configuration record.
    fn arguments(&self) -> Arguments {
        Arguments {
            file_name: self.file_name.as_deref().map(sanitize_arg),
            operation: self.operation.as_deref().map(sanitize_arg),
            item: self.item.clone(),
            id: self.id.as_deref().map(sanitize_arg),
        }
    }
}

fn init_logging(level: &str) -> Result<()> {
    let level: LevelFilter = level
        .parse()
        .map_err(|_| anyhow!("Invalid log level '{}'", level))?;

    let env = env_logger::Env::default().default_filter_or(level.to_string());
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

/// Rewrite `-fileName x` and `-fileName=x` style flags to their two-dash form.
///
/// Only the known flag names are rewritten, so values such as `-1` pass
/// through untouched. Everything after a `--` terminator is left alone.
pub fn normalize_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut normalized = Vec::new();
    let mut terminated = false;

    for arg in args {
        if terminated {
            normalized.push(arg);
            continue;
        }

        let rewritten = arg.to_str().and_then(|s| {
            let flag = s.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            FLAG_NAMES
                .contains(&name)
                .then(|| OsString::from(format!("--{flag}")))
        });

        if arg == "--" {
            terminated = true;
        }
        normalized.push(rewritten.unwrap_or(arg));
    }

    normalized
}
