//! Audit command implementation
//!
//! Loads and combines config files, records every item's rules into a fresh
//! registry and warns about rules that are turned off but never turned on.

use crate::cli::args::ColorChoice;
use crate::cli::common::{EXIT_FINDINGS, EXIT_SUCCESS, report_error};
use crate::config::load_and_combine;
use crate::error::ComposeError;
use crate::output::resolve_color_choice;
use crate::rules::RuleStateRegistry;
use std::path::PathBuf;

/// Run the audit command
///
/// # Returns
///
/// Exit code:
/// - 0: Success (or findings without `--strict`)
/// - 1: Findings with `--strict`
/// - 2: Error (I/O, unsupported file)
/// - 3: Parse error
pub fn run_audit(files: &[PathBuf], strict: bool, color: ColorChoice) -> i32 {
    match run_audit_inner(files, color) {
        Ok(reported) if strict && reported > 0 => EXIT_FINDINGS,
        Ok(_) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

fn run_audit_inner(files: &[PathBuf], color: ColorChoice) -> Result<usize, ComposeError> {
    let configs = load_and_combine(files)?;

    let mut registry = RuleStateRegistry::new();
    registry.record_configs(configs);

    Ok(registry.report_unnecessary_off(resolve_color_choice(color.into())))
}
