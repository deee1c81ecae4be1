//! `combine` and `rename` command implementations
//!
//! Both commands load config files in argument order, flatten them into one
//! list and print the list as JSON on stdout.

use crate::cli::common::{EXIT_SUCCESS, print_configs, report_error};
use crate::config::{load_and_combine, rename_rules_in};
use crate::error::ComposeError;
use std::path::PathBuf;

/// Run the combine command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error (I/O, unsupported file)
/// - 3: Parse error (invalid JSON/TOML or wrong shape)
pub fn run_combine(files: &[PathBuf], pretty: bool) -> i32 {
    finish(run_compose_inner(files, None, pretty))
}

/// Run the rename command
///
/// Exit codes match [`run_combine`].
pub fn run_rename(files: &[PathBuf], from: &str, to: &str, pretty: bool) -> i32 {
    finish(run_compose_inner(files, Some((from, to)), pretty))
}

fn finish(result: Result<(), ComposeError>) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

fn run_compose_inner(
    files: &[PathBuf],
    rename: Option<(&str, &str)>,
    pretty: bool,
) -> Result<(), ComposeError> {
    let mut configs = load_and_combine(files)?;

    if let Some((from, to)) = rename {
        configs = rename_rules_in(configs, from, to);
    }

    print_configs(&configs, pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::EXIT_ERROR;

    #[test]
    fn test_run_combine_missing_file() {
        let code = run_combine(&[PathBuf::from("/definitely/not/here.json")], false);
        assert_eq!(code, EXIT_ERROR);
    }

    #[test]
    fn test_missing_file_is_a_config_io_error() {
        let err = run_compose_inner(&[PathBuf::from("/definitely/not/here.json")], None, false)
            .unwrap_err();
        assert!(matches!(
            err,
            ComposeError::Config(crate::error::ConfigError::Io(_))
        ));
    }
}
