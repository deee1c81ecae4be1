//! Config items: loading, combining and rule renaming

pub mod compose;
pub mod rename;
pub mod source;

pub use compose::{ConfigInput, combine};
pub use rename::{rename_rules, rename_rules_in};
pub use source::{SourceFormat, load_and_combine, load_config_input, parse_config_input};
