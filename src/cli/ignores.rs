//! Ignores command implementation
//!
//! Prints the entries of `.eslintignore` in the current directory, or checks
//! paths against them.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_SUCCESS, print_json, report_error};
use crate::error::{ComposeError, IgnoreFileError};
use crate::ignore_file::{build_ignore_matcher, read_eslint_ignore};
use serde::Serialize;
use std::env;
use std::path::PathBuf;

/// JSON output structure for a checked path
#[derive(Debug, Serialize)]
struct PathCheck {
    path: String,
    ignored: bool,
}

/// Run the ignores command
///
/// A missing `.eslintignore` is not an error: human output is empty and
/// JSON output is `null`.
pub fn run_ignores(format: OutputFormat, check: &[PathBuf]) -> i32 {
    match run_ignores_inner(format, check) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

fn run_ignores_inner(format: OutputFormat, check: &[PathBuf]) -> Result<(), ComposeError> {
    let entries = read_eslint_ignore()?;

    if check.is_empty() {
        match format {
            OutputFormat::Human => {
                for entry in entries.iter().flatten() {
                    println!("{}", entry);
                }
            }
            OutputFormat::Json => print_json(&entries, false)?,
        }
        return Ok(());
    }

    let root = env::current_dir().map_err(IgnoreFileError::CurrentDir)?;
    let matcher = build_ignore_matcher(&root, entries.as_deref().unwrap_or_default())?;

    let results: Vec<PathCheck> = check
        .iter()
        .map(|path| PathCheck {
            path: path.display().to_string(),
            ignored: matcher.is_ignored(path, root.join(path).is_dir()),
        })
        .collect();

    match format {
        OutputFormat::Human => {
            for result in &results {
                let status = if result.ignored { "ignored" } else { "not ignored" };
                println!("{}: {}", result.path, status);
            }
        }
        OutputFormat::Json => print_json(&results, false)?,
    }

    Ok(())
}
