//! eslint-compose CLI entry point

use clap::Parser;
use eslint_compose::cli::{Command, args::Cli};
use std::process;

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Command::Combine { files, pretty } => {
            eslint_compose::cli::compose::run_combine(&files, pretty)
        }
        Command::Rename {
            from,
            to,
            files,
            pretty,
        } => eslint_compose::cli::compose::run_rename(&files, &from, &to, pretty),
        Command::Audit { files, strict } => {
            eslint_compose::cli::audit::run_audit(&files, strict, cli.color)
        }
        Command::Ignores { format, check } => {
            eslint_compose::cli::ignores::run_ignores(format, &check)
        }
    };

    process::exit(exit_code);
}
