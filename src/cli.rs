//! CLI argument parsing and command dispatch

pub mod args;
pub mod audit;
pub mod common;
pub mod compose;
pub mod ignores;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, Command, OutputFormat};
