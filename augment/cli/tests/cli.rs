use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// ============================================================================
// Argument handling
// ============================================================================

#[test]
fn test_help_flag() {
    cargo_bin_cmd!("normalize-enums")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Split comma-joined enum values"))
        .stdout(predicate::str::contains("<INPUT>"));
}

#[test]
fn test_missing_arguments_exit_one() {
    for mut cmd in [
        cargo_bin_cmd!("augment-nifi-security"),
        cargo_bin_cmd!("registry-security"),
        cargo_bin_cmd!("normalize-enums"),
        cargo_bin_cmd!("nifi-processor-state-enum"),
    ] {
        cmd.assert()
            .code(1)
            .stderr(predicate::str::contains("Usage"));
    }
}

#[test]
fn test_extra_argument_exit_one() {
    cargo_bin_cmd!("augment-nifi-security")
        .args(["a.json", "b.json", "c.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_input_file_exit_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.json");

    cargo_bin_cmd!("normalize-enums")
        .arg(dir.path().join("missing.json"))
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
    assert!(!output.exists());
}

#[test]
fn test_invalid_json_exit_one() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.json");
    fs::write(&input, "not json").unwrap();

    cargo_bin_cmd!("registry-security")
        .arg(&input)
        .arg(dir.path().join("out.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to parse"));
}

// ============================================================================
// Transformations
// ============================================================================

#[test]
fn test_augment_nifi_security() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nifi.json");
    let output = dir.path().join("nifi.out.json");
    fs::write(
        &input,
        json!({ "paths": { "/nifi-api/access/token": { "post": {} } } }).to_string(),
    )
    .unwrap();

    cargo_bin_cmd!("augment-nifi-security")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let doc = read_json(&output);
    assert_eq!(doc["components"]["securitySchemes"]["bearerAuth"]["scheme"], "bearer");
    assert_eq!(doc["security"], json!([{ "bearerAuth": [] }]));
    assert_eq!(doc["paths"]["/nifi-api/access/token"]["post"]["security"], json!([]));
}

#[test]
fn test_registry_security() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("registry.json");
    let output = dir.path().join("registry.out.json");
    fs::write(
        &input,
        json!({ "paths": { "/nifi-registry-api/access/token/login": { "post": {} } } }).to_string(),
    )
    .unwrap();

    cargo_bin_cmd!("registry-security")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let doc = read_json(&output);
    assert_eq!(
        doc["paths"]["/nifi-registry-api/access/token/login"]["post"]["security"],
        json!([{ "basicAuth": [] }])
    );
}

#[test]
fn test_normalize_enums_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.json");
    fs::write(&path, r#"{"enum": ["A, B,C", "B"]}"#).unwrap();

    cargo_bin_cmd!("normalize-enums")
        .arg(&path)
        .arg(&path)
        .assert()
        .success();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains('\n'), "output should be pretty-printed");
    assert_eq!(read_json(&path), json!({ "enum": ["A", "B", "C"] }));
}

#[test]
fn test_processor_state_enum() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nifi.json");
    let output = dir.path().join("nifi.out.json");
    fs::write(
        &input,
        json!({
            "components": { "schemas": { "ProcessorDTO": { "properties": {
                "state": { "type": "string", "enum": ["RUNNING", "STOPPED"] }
            } } } }
        })
        .to_string(),
    )
    .unwrap();

    cargo_bin_cmd!("nifi-processor-state-enum")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let doc = read_json(&output);
    assert_eq!(
        doc["components"]["schemas"]["ProcessorDTO"]["properties"]["state"]["enum"],
        json!(["RUNNING", "STOPPED", "DISABLED", "STARTING", "STOPPING", "RUN_ONCE"])
    );
}
