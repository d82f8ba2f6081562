#![allow(clippy::expect_used, reason = "Fine in tests")]
use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn replace_cmd() -> Command {
  Command::cargo_bin("replace").expect("replace binary should be built")
}

#[test]
fn test_replace_chains_in_mapping_order() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let template = temp_dir.path().join("greeting.txt.in");
  let output = temp_dir.path().join("greeting.txt");
  fs::write(&template, "Hello {{NAME}}, welcome to {{PLACE}}")
    .expect("Failed to write template");

  replace_cmd()
    .arg(&template)
    .arg(&output)
    .arg(r#"{"{{PLACE}}": "{{NAME}}'s house", "{{NAME}}": "Ann"}"#)
    .assert()
    .success();

  assert_eq!(
    fs::read_to_string(&output).expect("readable"),
    "Hello Ann, welcome to Ann's house"
  );
}

#[test]
fn test_replace_does_not_revisit_earlier_keys() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let template = temp_dir.path().join("greeting.txt.in");
  let output = temp_dir.path().join("greeting.txt");
  fs::write(&template, "Hello {{NAME}}, welcome to {{PLACE}}")
    .expect("Failed to write template");

  replace_cmd()
    .arg(&template)
    .arg(&output)
    .arg(r#"{"{{NAME}}": "Ann", "{{PLACE}}": "{{NAME}}'s house"}"#)
    .assert()
    .success();

  assert_eq!(
    fs::read_to_string(&output).expect("readable"),
    "Hello Ann, welcome to {{NAME}}'s house"
  );
}

#[test]
fn test_replace_empty_mapping_is_byte_identical() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let template = temp_dir.path().join("page.html");
  let output = temp_dir.path().join("page.out.html");
  let content = "<p>\u{e9}t\u{e9}</p>\r\n\t{{KEEP}}\n";
  fs::write(&template, content).expect("Failed to write template");

  replace_cmd()
    .arg(&template)
    .arg(&output)
    .arg("{}")
    .assert()
    .success();

  assert_eq!(
    fs::read(&output).expect("readable"),
    fs::read(&template).expect("readable")
  );
}

#[test]
fn test_replace_malformed_mapping_fails_before_io() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let template = temp_dir.path().join("t.txt");
  let output = temp_dir.path().join("o.txt");
  fs::write(&template, "x").expect("Failed to write template");

  replace_cmd()
    .arg(&template)
    .arg(&output)
    .arg(r#"{"unterminated": "#)
    .assert()
    .failure()
    .stderr(contains("substitutions"));

  assert!(!output.exists());
}

#[test]
fn test_replace_missing_template_fails() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let output = temp_dir.path().join("o.txt");

  replace_cmd()
    .arg(temp_dir.path().join("missing.in"))
    .arg(&output)
    .arg("{}")
    .assert()
    .failure()
    .stderr(contains("missing.in"));

  assert!(!output.exists());
}
