//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use serde_json::Value;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Rule set covering every operator form, in document order.
pub fn performance_rules_path() -> PathBuf {
    fixtures_dir().join("performance_settings.yml")
}

pub fn kickstart_path() -> PathBuf {
    fixtures_dir().join("kickstart.json")
}

pub fn performance_rules() -> Value {
    rackforge_common::load_document(&performance_rules_path()).expect("fixture rule set")
}
