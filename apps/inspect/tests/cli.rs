use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

fn inspect() -> Command {
    Command::new(env!("CARGO_BIN_EXE_paycard-inspect"))
}

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn stdout_json(path: &Path, extra: &[&str]) -> Value {
    let output = inspect().arg(path).args(extra).output().expect("run paycard-inspect");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout is json")
}

#[test]
fn prints_both_shapes_by_default() {
    let dir = tempdir().expect("temp dir");
    let config = write(&dir, "payment.json", r#"{ "card": { "supported": ["visa", "newbrand"] } }"#);

    let value = stdout_json(&config, &[]);

    assert_eq!(value["component"]["allowedCardTypes"], json!(["visa", "newbrand"]));
    assert_eq!(value["dropin"]["allowedCardTypes"], json!(["visa", "newbrand"]));
    assert_eq!(value["component"]["showsSecurityCodeField"], json!(true));
    assert_eq!(value["component"]["billingAddress"]["mode"], json!("none"));
    assert!(value["dropin"].get("style").is_none());
    assert!(value["component"].get("style").is_some());
}

#[test]
fn prints_selected_shape_only() {
    let dir = tempdir().expect("temp dir");
    let config = write(&dir, "payment.json", r#"{ "supported": ["mc"] }"#);

    let value = stdout_json(&config, &["--shape", "dropin"]);

    assert_eq!(value["allowedCardTypes"], json!(["mc"]));
    assert!(value.get("component").is_none());
    assert!(value.get("localizationParameters").is_none());
}

#[test]
fn search_requires_lookup_mode() {
    let dir = tempdir().expect("temp dir");
    let config = write(&dir, "payment.json", r#"{ "card": {} }"#);

    inspect()
        .arg(&config)
        .args(["--search", "amsterdam"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Address lookup is not enabled"));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempdir().expect("temp dir");

    inspect()
        .arg(dir.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

#[test]
fn malformed_address_book_fails() {
    let dir = tempdir().expect("temp dir");
    let config = write(&dir, "payment.json", "{}");
    let book = write(&dir, "addresses.json", "{ \"street\": 1 }");

    inspect()
        .arg(&config)
        .arg("--addresses")
        .arg(&book)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse address book"));
}

#[test]
fn search_runs_through_the_lookup_provider() {
    let dir = tempdir().expect("temp dir");
    let config = write(&dir, "payment.json", r#"{ "card": { "addressVisibility": "lookup" } }"#);
    let book = write(
        &dir,
        "addresses.json",
        r#"[
            { "street": "Simon Carmiggeltstraat", "city": "Amsterdam", "postalCode": "1011 DJ" },
            { "street": "Market Street", "city": "San Francisco", "postalCode": "94103" }
        ]"#,
    );

    let value = stdout_json(
        &config,
        &["--addresses", book.to_str().expect("utf-8 path"), "--search", "amsterdam"],
    );

    assert_eq!(value.as_array().map(Vec::len), Some(1));
    assert_eq!(value[0]["postalCode"], json!("1011 DJ"));
}

#[test]
fn environment_overrides_layer_over_the_file() {
    let dir = tempdir().expect("temp dir");
    let config = write(&dir, "payment.json", r#"{ "card": { "holderNameRequired": true } }"#);

    let output = inspect()
        .arg(&config)
        .args(["--shape", "component"])
        .env("PAYCARD__CARD__HIDE_CVC", "true")
        .output()
        .expect("run paycard-inspect");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout is json");

    assert_eq!(value["showsSecurityCodeField"], json!(false));
    assert_eq!(value["showsHolderNameField"], json!(true));
    assert_eq!(value["storedCard"]["showsSecurityCodeField"], json!(true));
}
