//! Error types for eslint-compose
//!
//! This module defines the error types used throughout the crate, following
//! a hierarchical structure with specific error variants for different
//! error categories.

use std::path::PathBuf;

/// Errors raised while loading config items from disk
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading a config file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid JSON in a config file
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid TOML in a config file
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// File extension is neither `.json` nor `.toml`
    #[error("Unsupported config file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The document parsed but is not a config item or a list of them
    #[error("Invalid config shape in {}: {message}", file.display())]
    InvalidShape { file: PathBuf, message: String },
}

/// Ignore-file errors
#[derive(Debug, thiserror::Error)]
pub enum IgnoreFileError {
    /// The ignore file exists but could not be read
    #[error("Failed to read ignore file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The current working directory could not be determined
    #[error("Failed to resolve current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// An entry could not be compiled into a matcher
    #[error("Invalid ignore pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// Top-level error type for eslint-compose
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    /// Config loading error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Ignore file error
    #[error("Ignore file error: {0}")]
    IgnoreFile(#[from] IgnoreFileError),

    /// Output could not be serialized
    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
