#![forbid(unsafe_code)]

//! Rule on/off state tracking across composed config layers
//!
//! A config pipeline records every layer's rules into a [`RuleStateRegistry`]
//! and, once composition is done, asks for the rules that some layer turned
//! off but no layer ever turned on. Those entries are dead configuration.

use crate::output::{UnnecessaryOffWarning, WarningWriter};
use crate::types::{ConfigItem, RuleState, RulesMap};
use indexmap::IndexSet;
use std::io;
use termcolor::{ColorChoice, WriteColor};

/// Accumulated on/off observations
///
/// Both sets only grow. Iteration follows first-insertion order, so reports
/// are deterministic for a given recording history.
#[derive(Debug, Clone, Default)]
pub struct RuleStateRegistry {
    on: IndexSet<String>,
    off: IndexSet<String>,
}

impl RuleStateRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state of every rule in one rules mapping
    ///
    /// Entries whose effective severity is null are skipped. Absent rules
    /// record nothing.
    pub fn record(&mut self, rules: Option<&RulesMap>) {
        let Some(rules) = rules else {
            return;
        };

        for (name, setting) in rules {
            match RuleState::from(setting) {
                RuleState::Off => self.insert_off(name),
                RuleState::On => self.insert_on(name),
                RuleState::Unspecified => {}
            }
        }
    }

    /// Record every item of a combined list and hand the list back
    pub fn record_configs(&mut self, configs: Vec<ConfigItem>) -> Vec<ConfigItem> {
        for config in &configs {
            self.record(config.rules());
        }
        configs
    }

    fn insert_on(&mut self, name: &str) {
        if !self.on.contains(name) {
            self.on.insert(name.to_string());
        }
    }

    fn insert_off(&mut self, name: &str) {
        if !self.off.contains(name) {
            self.off.insert(name.to_string());
        }
    }

    /// Whether the rule was ever recorded as on
    pub fn is_on(&self, name: &str) -> bool {
        self.on.contains(name)
    }

    /// Whether the rule was ever recorded as off
    pub fn is_off(&self, name: &str) -> bool {
        self.off.contains(name)
    }

    /// Rules recorded off but never on, in first-recorded-off order
    pub fn unnecessary_off(&self) -> Vec<&str> {
        self.off
            .iter()
            .filter(|name| !self.on.contains(name.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Write one warning per unnecessary off rule
    ///
    /// Returns the number of warnings written.
    pub fn write_unnecessary_off<W: WriteColor>(
        &self,
        writer: &mut WarningWriter<W>,
    ) -> io::Result<usize> {
        let rules = self.unnecessary_off();
        for &rule in &rules {
            writer.warn(&UnnecessaryOffWarning { rule })?;
        }
        Ok(rules.len())
    }

    /// Warn on stderr about every unnecessary off rule
    ///
    /// A failed write to stderr is ignored. Returns the number of rules
    /// reported.
    pub fn report_unnecessary_off(&self, color: ColorChoice) -> usize {
        let mut writer = WarningWriter::stderr(color);
        match self.write_unnecessary_off(&mut writer) {
            Ok(count) => count,
            Err(_) => self.unnecessary_off().len(),
        }
    }
}
