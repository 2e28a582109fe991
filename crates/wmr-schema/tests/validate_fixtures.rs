//! Integration test: validate every receipt fixture under `tests/fixtures/`.
//!
//! Files in `valid/` must pass hard validation; files in `invalid/` must be
//! rejected with at least one keyed violation.

use std::path::{Path, PathBuf};

use serde_json::Value;
use wmr_schema::{ReceiptValidator, SchemaValidationError};

fn fixture_dir(kind: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(kind)
}

fn find_fixtures(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

fn load(path: &Path) -> Value {
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_valid_fixtures_pass() {
    let validator = ReceiptValidator::new().unwrap();
    let files = find_fixtures(&fixture_dir("valid"));
    assert!(!files.is_empty());
    for path in files {
        if let Err(e) = validator.validate(&load(&path)) {
            panic!("{} should be valid: {e}", path.display());
        }
    }
}

#[test]
fn test_invalid_fixtures_are_rejected() {
    let validator = ReceiptValidator::new().unwrap();
    let files = find_fixtures(&fixture_dir("invalid"));
    assert!(!files.is_empty());
    for path in files {
        match validator.validate(&load(&path)) {
            Err(SchemaValidationError::Rejected { violations }) => {
                assert!(!violations.is_empty(), "{}", path.display());
                assert!(
                    violations.as_slice().iter().all(|v| !v.key.is_empty()),
                    "{}: {violations}",
                    path.display()
                );
            }
            other => panic!("{} should be rejected, got {other:?}", path.display()),
        }
    }
}

#[test]
fn test_registration_conflict_fixture_names_reason_field() {
    let validator = ReceiptValidator::new().unwrap();
    let payload = load(&fixture_dir("invalid").join("both_registration_and_reason.json"));
    let err = validator.validate(&payload).unwrap_err();
    let keys: Vec<&str> = err
        .violations()
        .unwrap()
        .as_slice()
        .iter()
        .map(|v| v.key.as_str())
        .collect();
    assert_eq!(keys, vec!["carrier.reasonForNoRegistrationNumber"]);
}

#[test]
fn test_validator_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReceiptValidator>();
}
