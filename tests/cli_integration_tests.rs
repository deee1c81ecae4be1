//! CLI integration tests
//!
//! These tests run the built binary against fixture files and temp
//! directories, covering:
//! - combine: flattening and JSON output
//! - rename: prefix rewriting
//! - audit: warnings and --strict exit codes
//! - ignores: listing and path checks

mod common;

use assert_cmd::Command;
use common::fixture_path;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn bin() -> Command {
    Command::cargo_bin("eslint-compose").unwrap()
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_help_lists_commands() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("combine"))
        .stdout(predicate::str::contains("rename"))
        .stdout(predicate::str::contains("audit"))
        .stdout(predicate::str::contains("ignores"));
}

#[test]
fn test_combine_prints_flat_list() {
    let output = bin()
        .arg("combine")
        .arg(fixture_path("base.json"))
        .arg(fixture_path("layers.json"))
        .arg(fixture_path("style.toml"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let value = stdout_json(&output);
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["name"], "base");
    assert_eq!(items[3]["name"], "style");
    assert_eq!(items[3]["files"][0], "**/*.vue");
}

#[test]
fn test_combine_keeps_item_field_order_and_nulls() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("ordered.json");
    fs::write(
        &config,
        r#"{"name":"late-rules","files":["*.js"],"settings":null,"rules":{"b":1,"a":"off"}}"#,
    )
    .unwrap();

    bin()
        .arg("combine")
        .arg(&config)
        .assert()
        .success()
        .stdout(
            "[{\"name\":\"late-rules\",\"files\":[\"*.js\"],\"settings\":null,\"rules\":{\"b\":1,\"a\":\"off\"}}]\n",
        );
}

#[test]
fn test_combine_missing_file_exits_with_error() {
    bin()
        .arg("combine")
        .arg("does-not-exist.json")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_combine_bad_shape_exits_with_parse_error() {
    bin()
        .arg("combine")
        .arg(fixture_path("not_an_item.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("element 1"));
}

#[test]
fn test_rename_rewrites_prefix() {
    let output = bin()
        .args(["rename", "--from", "@typescript-eslint/", "--to", "ts/"])
        .arg(fixture_path("base.json"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let value = stdout_json(&output);
    let rules = value[0]["rules"].as_object().unwrap();
    let keys: Vec<&str> = rules.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["no-console", "semi", "ts/no-unused-vars"]);
}

#[test]
fn test_audit_warns_about_never_on_rules() {
    bin()
        .args(["--color", "never", "audit"])
        .arg(fixture_path("base.json"))
        .arg(fixture_path("layers.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "[eslint] rule `no-console` is never turned on, you can remove the rule from your config",
        ))
        .stderr(predicate::str::contains("`no-debugger`"))
        .stderr(predicate::str::contains("`semi`").not());
}

#[test]
fn test_audit_strict_exit_codes() {
    bin()
        .args(["audit", "--strict"])
        .arg(fixture_path("layers.json"))
        .assert()
        .code(1);

    let temp_dir = TempDir::new().unwrap();
    let clean = temp_dir.path().join("clean.json");
    fs::write(&clean, r#"{"rules": {"semi": "error", "quotes": "off"}, "x": 1}"#).unwrap();
    let on = temp_dir.path().join("on.toml");
    fs::write(&on, "[rules]\nquotes = \"warn\"\n").unwrap();

    bin()
        .args(["audit", "--strict"])
        .arg(&clean)
        .arg(&on)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_ignores_without_file_prints_nothing() {
    let temp_dir = TempDir::new().unwrap();

    bin()
        .current_dir(temp_dir.path())
        .arg("ignores")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    bin()
        .current_dir(temp_dir.path())
        .args(["ignores", "--format", "json"])
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn test_ignores_lists_entries() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".eslintignore"),
        "node_modules\n# comment\n\ndist\n",
    )
    .unwrap();

    bin()
        .current_dir(temp_dir.path())
        .arg("ignores")
        .assert()
        .success()
        .stdout("node_modules\ndist\n");

    bin()
        .current_dir(temp_dir.path())
        .args(["ignores", "-f", "json"])
        .assert()
        .success()
        .stdout("[\"node_modules\",\"dist\"]\n");
}

#[test]
fn test_ignores_check_paths() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".eslintignore"), "dist\n*.min.js\n").unwrap();

    bin()
        .current_dir(temp_dir.path())
        .args(["ignores", "--check", "dist/app.js", "src/app.js", "vendor/a.min.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dist/app.js: ignored"))
        .stdout(predicate::str::contains("src/app.js: not ignored"))
        .stdout(predicate::str::contains("vendor/a.min.js: ignored"));
}

#[test]
fn test_ignores_unreadable_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join(".eslintignore")).unwrap();

    bin()
        .current_dir(temp_dir.path())
        .arg("ignores")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(".eslintignore"));
}
