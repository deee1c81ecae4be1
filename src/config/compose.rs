#![forbid(unsafe_code)]

//! Flattening of single items and item lists into one ordered list

use crate::types::ConfigItem;

/// One argument to [`combine`]: a lone item or a list of items
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigInput {
    Single(ConfigItem),
    Many(Vec<ConfigItem>),
}

impl ConfigInput {
    /// Number of items this argument contributes
    pub fn len(&self) -> usize {
        match self {
            ConfigInput::Single(_) => 1,
            ConfigInput::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the argument, yielding its items in order
    pub fn into_items(self) -> Vec<ConfigItem> {
        match self {
            ConfigInput::Single(item) => vec![item],
            ConfigInput::Many(items) => items,
        }
    }
}

impl From<ConfigItem> for ConfigInput {
    fn from(item: ConfigItem) -> Self {
        ConfigInput::Single(item)
    }
}

impl From<Vec<ConfigItem>> for ConfigInput {
    fn from(items: Vec<ConfigItem>) -> Self {
        ConfigInput::Many(items)
    }
}

/// Combines single items and item lists into one flat list
///
/// Arguments are visited left to right. No deduplication or validation
/// takes place.
pub fn combine<I>(inputs: I) -> Vec<ConfigItem>
where
    I: IntoIterator,
    I::Item: Into<ConfigInput>,
{
    inputs
        .into_iter()
        .flat_map(|input| input.into().into_items())
        .collect()
}

/// Variadic form of [`combine`]
///
/// ```
/// use eslint_compose::{combine, ConfigItem};
///
/// let base = ConfigItem::default();
/// let presets = vec![ConfigItem::default(), ConfigItem::default()];
/// assert_eq!(combine!(base, presets).len(), 3);
/// ```
#[macro_export]
macro_rules! combine {
    ($($config:expr),* $(,)?) => {{
        let inputs: ::std::vec::Vec<$crate::config::ConfigInput> =
            ::std::vec![$($crate::config::ConfigInput::from($config)),*];
        $crate::config::combine(inputs)
    }};
}
