#![forbid(unsafe_code)]

//! eslint-compose: helpers for composing ESLint flat-config items
//!
//! Flattens nested config lists, renames rule-name prefixes for plugin
//! migrations, tracks which rules are turned on or off across composed
//! layers, and reads `.eslintignore` into a list of path globs.

pub mod cli;
pub mod config;
pub mod error;
pub mod ignore_file;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{ComposeError, ConfigError, IgnoreFileError};

// Re-export the component entry points
pub use config::{ConfigInput, combine, rename_rules};
pub use ignore_file::{read_eslint_ignore, read_ignore_file};
pub use rules::RuleStateRegistry;
pub use types::{ConfigItem, RuleSetting, RuleState, RulesMap};
