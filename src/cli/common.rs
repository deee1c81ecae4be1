//! Common helper functions shared across CLI commands

use crate::error::{ComposeError, ConfigError};
use crate::types::ConfigItem;
use serde::Serialize;
use std::io::{self, Write};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Map an error to its exit code
///
/// Invalid JSON/TOML and config files of the wrong shape are parse errors;
/// everything else is a general error.
pub(crate) fn exit_code_for(err: &ComposeError) -> i32 {
    match err {
        ComposeError::Config(
            ConfigError::Json(_) | ConfigError::Toml(_) | ConfigError::InvalidShape { .. },
        ) => EXIT_PARSE_ERROR,
        _ => EXIT_ERROR,
    }
}

/// Print the error to stderr and return its exit code
pub(crate) fn report_error(err: &ComposeError) -> i32 {
    eprintln!("Error: {}", err);
    exit_code_for(err)
}

/// Serialize a value as one line (or pretty block) of JSON
///
/// # Errors
///
/// Returns `ComposeError::Output` if serialization fails and
/// `ComposeError::Io` if the trailing newline cannot be written.
pub(crate) fn write_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
    pretty: bool,
) -> Result<(), ComposeError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Serialize a value as JSON to stdout
pub(crate) fn print_json<T: Serialize + ?Sized>(
    value: &T,
    pretty: bool,
) -> Result<(), ComposeError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_json(&mut out, value, pretty)?;
    out.flush()?;
    Ok(())
}

/// Print a combined config list to stdout
pub(crate) fn print_configs(configs: &[ConfigItem], pretty: bool) -> Result<(), ComposeError> {
    print_json(configs, pretty)
}
