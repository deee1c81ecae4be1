//! Test utilities for eslint-compose integration tests
#![allow(dead_code)]

use eslint_compose::RulesMap;
use serde_json::Value;
use std::path::PathBuf;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Path to a file under tests/fixtures/configs
pub fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("configs")
        .join(filename)
}

/// Build a rules mapping from a JSON object literal
pub fn rules(value: Value) -> RulesMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
