//! CLI argument parsing using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for commands that print data
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON document on stdout
    Json,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorChoice> for termcolor::ColorChoice {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => termcolor::ColorChoice::Auto,
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}

/// eslint-compose CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "eslint-compose")]
#[command(about = "Compose ESLint flat-config items and audit their rules")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Warning coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Combine config files into one flat list and print it as JSON
    Combine {
        /// Config files (.json or .toml), in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Rename a rule-name prefix in every combined config item
    Rename {
        /// Prefix to replace
        #[arg(long)]
        from: String,

        /// Replacement prefix
        #[arg(long)]
        to: String,

        /// Config files (.json or .toml), in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Warn about rules that are turned off but never turned on
    Audit {
        /// Config files (.json or .toml), in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Exit with status 1 when any rule is reported
        #[arg(long)]
        strict: bool,
    },

    /// Print the entries of .eslintignore in the current directory
    Ignores {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,

        /// Report whether each path is ignored instead of listing entries
        #[arg(long, num_args = 1..)]
        check: Vec<PathBuf>,
    },
}
