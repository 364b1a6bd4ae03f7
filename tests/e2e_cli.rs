//! CLI end-to-end tests
//!
//! Tests for the rackforge command-line interface.

mod common;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the rackforge binary
#[allow(deprecated)]
fn rackforge_cmd() -> Command {
    let mut cmd = Command::cargo_bin("rackforge").unwrap();
    // Keep output independent of any config in the working directory
    cmd.current_dir(std::env::temp_dir());
    cmd
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = rackforge_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = rackforge_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rackforge"));
}

#[test]
fn test_cli_select_help() {
    let mut cmd = rackforge_cmd();
    cmd.args(["select", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Select the settings"));
}

#[test]
fn test_cli_select_with_properties() {
    let mut cmd = rackforge_cmd();
    let output = cmd
        .arg("select")
        .arg("--rules")
        .arg(common::performance_rules_path())
        .args(["-p", "mtm=7X06", "-p", "model=SR650"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let settings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(settings["Processors.HyperThreading"], "Enable");
    assert_eq!(settings["Processors.C1EnhancedMode"], "Disable");
    assert!(settings.get("Memory.MemorySpeed").is_none());
}

#[test]
fn test_cli_select_exponent_like_property_stays_string() {
    let dir = tempdir().unwrap();
    let rules = dir.path().join("rules.json");
    fs::write(
        &rules,
        r#"{"r1": {"conditionOperator": "or", "conditions": [{"mtm": "7E02"}], "settings": {"A": 1}}}"#,
    )
    .unwrap();

    let mut cmd = rackforge_cmd();
    let output = cmd
        .arg("select")
        .arg("--rules")
        .arg(&rules)
        .args(["-p", "mtm=7E02"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let settings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(settings, serde_json::json!({"A": 1}));
}

#[test]
fn test_cli_select_typed_property() {
    let dir = tempdir().unwrap();
    let rules = dir.path().join("rules.json");
    fs::write(
        &rules,
        r#"{"r1": {"conditionOperator": "and", "conditions": [{"cores": 32}], "settings": {"A": 1}}}"#,
    )
    .unwrap();

    let mut cmd = rackforge_cmd();
    cmd.arg("select")
        .arg("--rules")
        .arg(&rules)
        .args(["-p", "cores:=32"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"A\": 1"));
}

#[test]
fn test_cli_check_requires_rules_flag() {
    let mut cmd = rackforge_cmd();
    cmd.arg("check")
        .arg(common::performance_rules_path())
        .assert()
        .failure();
}

#[test]
fn test_cli_select_properties_file_yaml_output() {
    let dir = tempdir().unwrap();
    let props = dir.path().join("props.json");
    fs::write(&props, r#"{"model": "SR630"}"#).unwrap();

    let mut cmd = rackforge_cmd();
    cmd.arg("select")
        .arg("--rules")
        .arg(common::performance_rules_path())
        .arg("--properties")
        .arg(&props)
        .args(["--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Memory.MemorySpeed: Max Performance"))
        .stdout(predicate::str::contains("Processors.HyperThreading: Disable"));
}

#[test]
fn test_cli_select_explain() {
    let mut cmd = rackforge_cmd();
    cmd.arg("select")
        .arg("--rules")
        .arg(common::performance_rules_path())
        .arg("--explain")
        .assert()
        .success()
        .stderr(predicate::str::contains("Satisfied rules: 1"))
        .stderr(predicate::str::contains("baseline"));
}

#[test]
fn test_cli_select_missing_rules() {
    let mut cmd = rackforge_cmd();
    cmd.args(["select", "--rules", "/nonexistent/rules.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_cli_select_bad_property() {
    let mut cmd = rackforge_cmd();
    cmd.arg("select")
        .arg("--rules")
        .arg(common::performance_rules_path())
        .args(["-p", "model"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KEY=VALUE"));
}

#[test]
fn test_cli_check_reports_unknown_operator() {
    let mut cmd = rackforge_cmd();
    cmd.arg("check")
        .arg("--rules")
        .arg(common::performance_rules_path())
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "error: typo_operator: unknown conditionOperator 'xor'",
        ));
}

#[test]
fn test_cli_check_clean_rule_set() {
    let dir = tempdir().unwrap();
    let rules = dir.path().join("rules.json");
    fs::write(
        &rules,
        r#"{"r1": {"conditionOperator": true, "settings": {"A": 1}}}"#,
    )
    .unwrap();

    let mut cmd = rackforge_cmd();
    cmd.arg("check")
        .arg("--rules")
        .arg(&rules)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 error(s), 0 warning(s)"));
}

#[test]
fn test_cli_inventory_writes_yaml() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("hosts.yml");

    let mut cmd = rackforge_cmd();
    cmd.arg("inventory")
        .arg(common::kickstart_path())
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("BMC Servers: 3"))
        .stdout(predicate::str::contains("Switches: 2"))
        .stdout(predicate::str::contains("Provisioners: 1"));

    let yaml = fs::read_to_string(&output).unwrap();
    assert!(yaml.contains("node_ru2"));
    assert!(yaml.contains("tor-switch-a"));
}

#[test]
fn test_cli_inventory_uses_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("rackforge.toml");
    fs::write(
        &config,
        "[inventory]\nbmc_address_prefix = \"10.0.7\"\n\n[inventory.jump_host]\nname = \"bastion\"\naddress = \"192.0.2.10\"\n",
    )
    .unwrap();
    let output = dir.path().join("hosts.yml");

    let mut cmd = rackforge_cmd();
    cmd.arg("--config")
        .arg(&config)
        .arg("inventory")
        .arg(common::kickstart_path())
        .arg(&output)
        .assert()
        .success();

    let doc: serde_yaml::Value = serde_yaml::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let children = &doc["all"]["children"];
    assert_eq!(children["jump_hosts"]["hosts"]["bastion"]["ansible_host"], "192.0.2.10");
    assert_eq!(children["bmc_servers"]["hosts"]["node_ru7"]["ansible_host"], "10.0.7.7");
}

#[test]
fn test_cli_inventory_missing_input() {
    let dir = tempdir().unwrap();
    let mut cmd = rackforge_cmd();
    cmd.arg("inventory")
        .arg("/nonexistent/kickstart.json")
        .arg(dir.path().join("hosts.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_cli_validate_defaults() {
    let mut cmd = rackforge_cmd();
    cmd.arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("using defaults"));
}
