#![forbid(unsafe_code)]

//! Core domain types for eslint-compose
//!
//! This module defines the config item record and the rule-setting
//! classification shared by the combiner, renamer and state recorder.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Ordered mapping from rule name to rule-setting
///
/// Backed by `serde_json::Map` with `preserve_order`, so iteration follows
/// insertion order.
pub type RulesMap = serde_json::Map<String, Value>;

/// A single flat-config item
///
/// Only `rules` is interpreted. The item is kept as an ordered field map, so
/// every other field, the position of `rules` and explicit `null` values all
/// survive a load/serialize cycle unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigItem(serde_json::Map<String, Value>);

impl ConfigItem {
    /// Creates an empty item
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an item carrying only the given rules
    pub fn with_rules(rules: RulesMap) -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert("rules".to_string(), Value::Object(rules));
        ConfigItem(fields)
    }

    /// The item's rules, if `rules` is present and is a mapping
    pub fn rules(&self) -> Option<&RulesMap> {
        self.0.get("rules").and_then(Value::as_object)
    }

    pub fn rules_mut(&mut self) -> Option<&mut RulesMap> {
        self.0.get_mut("rules").and_then(Value::as_object_mut)
    }

    /// Look up any top-level field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a top-level field, keeping its slot if it already exists
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// All top-level fields in order
    pub fn fields(&self) -> &serde_json::Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> serde_json::Map<String, Value> {
        self.0
    }
}

impl From<serde_json::Map<String, Value>> for ConfigItem {
    fn from(fields: serde_json::Map<String, Value>) -> Self {
        ConfigItem(fields)
    }
}

/// A rule-setting as written in a config: a bare severity or a sequence
/// whose first element is the severity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleSetting<'a> {
    Scalar(&'a Value),
    Sequence(&'a [Value]),
}

impl<'a> RuleSetting<'a> {
    /// Classifies a raw setting value
    pub fn from_value(value: &'a Value) -> Self {
        match value {
            Value::Array(items) => RuleSetting::Sequence(items),
            other => RuleSetting::Scalar(other),
        }
    }

    /// The value that decides the severity, if any
    pub fn severity_value(&self) -> Option<&'a Value> {
        match self {
            RuleSetting::Scalar(value) => Some(value),
            RuleSetting::Sequence(items) => items.first(),
        }
    }

    /// Normalizes the setting into an on/off state
    pub fn state(&self) -> RuleState {
        match self.severity_value() {
            None | Some(Value::Null) => RuleState::Unspecified,
            Some(Value::String(s)) if s == "off" => RuleState::Off,
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => RuleState::Off,
            Some(_) => RuleState::On,
        }
    }
}

/// Effective state of a rule-setting
///
/// Only the off/on distinction matters; `warn` and `error` are both `On`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleState {
    Off,
    On,
    Unspecified,
}

impl RuleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleState::Off => "off",
            RuleState::On => "on",
            RuleState::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for RuleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&Value> for RuleState {
    fn from(value: &Value) -> Self {
        RuleSetting::from_value(value).state()
    }
}
