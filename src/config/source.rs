//! Loading config items from JSON and TOML files

use crate::config::ConfigInput;
use crate::error::ConfigError;
use crate::types::ConfigItem;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// On-disk formats a config item can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Toml,
}

impl SourceFormat {
    /// Detects the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(SourceFormat::Json),
            Some("toml") => Some(SourceFormat::Toml),
            _ => None,
        }
    }
}

/// Load a config file
///
/// A JSON file may hold one item (an object) or a list of items (an array of
/// objects). A TOML file always holds a single item.
///
/// # Errors
///
/// Returns `ConfigError::UnsupportedFormat` for unknown extensions,
/// `ConfigError::Io` if the file cannot be read, and a parse or shape error
/// if the contents are not a config item.
pub fn load_config_input(path: impl AsRef<Path>) -> Result<ConfigInput, ConfigError> {
    let path = path.as_ref();
    let format = SourceFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
    let content = fs::read_to_string(path)?;
    parse_config_input(&content, format, path)
}

/// Parse config file contents in the given format
///
/// `origin` is only used in error messages.
pub fn parse_config_input(
    content: &str,
    format: SourceFormat,
    origin: &Path,
) -> Result<ConfigInput, ConfigError> {
    match format {
        SourceFormat::Toml => {
            let item: ConfigItem = toml::from_str(content)?;
            Ok(ConfigInput::Single(item))
        }
        SourceFormat::Json => match serde_json::from_str::<Value>(content)? {
            Value::Array(values) => {
                let items = values
                    .into_iter()
                    .enumerate()
                    .map(|(index, value)| item_from_value(value, origin, Some(index)))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(ConfigInput::Many(items))
            }
            value => Ok(ConfigInput::Single(item_from_value(value, origin, None)?)),
        },
    }
}

fn item_from_value(
    value: Value,
    origin: &Path,
    index: Option<usize>,
) -> Result<ConfigItem, ConfigError> {
    if !value.is_object() {
        let location = match index {
            Some(index) => format!("element {index}"),
            None => "top level".to_string(),
        };
        return Err(ConfigError::InvalidShape {
            file: origin.to_path_buf(),
            message: format!("expected a config object at {location}"),
        });
    }

    let item = serde_json::from_value(value)?;
    Ok(item)
}

/// Load several config files and combine them in argument order
pub fn load_and_combine<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<ConfigItem>, ConfigError> {
    let inputs = paths
        .iter()
        .map(load_config_input)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(crate::config::combine(inputs))
}
