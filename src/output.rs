//! Diagnostic output

pub mod warnings;

pub use warnings::{UnnecessaryOffWarning, WarningWriter, resolve_color_choice};
