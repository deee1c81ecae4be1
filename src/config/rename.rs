#![forbid(unsafe_code)]

//! Rule-name prefix renaming
//!
//! Used when a plugin is registered under a different namespace than the one
//! its rules were published with, e.g. `@typescript-eslint/` to `ts/`.

use crate::types::{ConfigItem, RulesMap};

/// Renames every rule whose name starts with `from` so it starts with `to`
///
/// Keys that do not match pass through unchanged. The result keeps the
/// input order, with each renamed key in its original slot. Values are moved,
/// not copied. An empty `from` matches every key.
///
/// If a renamed key collides with another key, the later entry's value wins
/// and the earlier entry's slot is kept.
pub fn rename_rules(rules: RulesMap, from: &str, to: &str) -> RulesMap {
    rules
        .into_iter()
        .map(|(key, value)| match key.strip_prefix(from) {
            Some(rest) => (format!("{to}{rest}"), value),
            None => (key, value),
        })
        .collect()
}

impl ConfigItem {
    /// Applies [`rename_rules`] to this item's rules, if it has any
    ///
    /// The `rules` field keeps its slot among the item's other fields.
    pub fn rename_rules(mut self, from: &str, to: &str) -> Self {
        if let Some(rules) = self.rules_mut() {
            let taken = std::mem::take(rules);
            *rules = rename_rules(taken, from, to);
        }
        self
    }
}

/// Applies [`rename_rules`] to every item in a combined list
pub fn rename_rules_in(configs: Vec<ConfigItem>, from: &str, to: &str) -> Vec<ConfigItem> {
    configs
        .into_iter()
        .map(|item| item.rename_rules(from, to))
        .collect()
}
