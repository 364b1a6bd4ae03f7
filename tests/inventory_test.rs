//! Kickstart to inventory conversion integration tests.

mod common;

use rackforge_inventory::{convert, load_kickstart, InventoryOptions, Kickstart};
use serde_yaml::Value;

fn fixture_inventory_yaml() -> Value {
    let kickstart = load_kickstart(&common::kickstart_path()).unwrap();
    let inventory = convert(&kickstart, &InventoryOptions::default()).unwrap();
    serde_yaml::from_str(&inventory.to_yaml().unwrap()).unwrap()
}

#[test]
fn fixture_summary() {
    let kickstart = load_kickstart(&common::kickstart_path()).unwrap();
    let summary = convert(&kickstart, &InventoryOptions::default())
        .unwrap()
        .summary();
    assert_eq!(summary.bmc_servers, 3);
    assert_eq!(summary.switches, 2);
    assert_eq!(summary.provisioners, 1);
}

#[test]
fn group_order_matches_inventory_layout() {
    let doc = fixture_inventory_yaml();
    let groups: Vec<&str> = doc["all"]["children"]
        .as_mapping()
        .unwrap()
        .keys()
        .map(|k| k.as_str().unwrap())
        .collect();
    assert_eq!(
        groups,
        vec![
            "jump_hosts",
            "bmc_servers",
            "switches",
            "tor_switches",
            "mgmt_switches",
            "provisioners",
            "storage_nodes",
            "compute_nodes",
            "service_nodes"
        ]
    );
}

#[test]
fn bmc_hosts_rendered() {
    let doc = fixture_inventory_yaml();
    let bmc = &doc["all"]["children"]["bmc_servers"];

    let ru2 = &bmc["hosts"]["node_ru2"];
    assert_eq!(ru2["ansible_host"], "169.253.1.2");
    assert_eq!(ru2["ru_number"].as_u64(), Some(2));
    assert_eq!(ru2["node_type"], "storage");
    assert_eq!(ru2["ibm_mtm"], "9043-MRX");
    assert_eq!(ru2["provisioning_mac"], "b8:ce:f6:00:00:21");
    assert_eq!(ru2["baremetal_interface"], "ens1f1");

    let ru9 = &bmc["hosts"]["node_ru9"];
    assert_eq!(ru9["serial_number"], "");
    assert!(ru9.get("provisioning_mac").is_none());

    assert_eq!(bmc["vars"]["ansible_user"], "USERID");
    assert_eq!(bmc["vars"]["ansible_password"], "{{ vault_imm_password }}");
    assert_eq!(bmc["vars"]["powerrp"], "restore");
}

#[test]
fn type_groups_hold_empty_members() {
    let doc = fixture_inventory_yaml();
    let children = &doc["all"]["children"];
    assert!(children["storage_nodes"]["hosts"]["node_ru2"]
        .as_mapping()
        .unwrap()
        .is_empty());
    assert!(children["compute_nodes"]["hosts"].get("node_ru7").is_some());
    assert!(children["service_nodes"]["hosts"].get("node_ru9").is_some());
    assert!(children["tor_switches"]["hosts"].get("tor-switch-a").is_some());
    assert!(children["mgmt_switches"]["hosts"].get("mgmt-switch").is_some());
}

#[test]
fn switches_and_provisioners_rendered() {
    let doc = fixture_inventory_yaml();
    let children = &doc["all"]["children"];

    let tor = &children["switches"]["hosts"]["tor-switch-a"];
    assert_eq!(tor["ansible_host"], "fd8c:215d:178e:c0de::40");
    assert_eq!(tor["mac_address"], "1c:34:da:00:00:40");
    assert_eq!(tor["software_version"], "5.4.0");
    assert_eq!(children["switches"]["vars"]["ansible_connection"], "network_cli");

    let prov = &children["provisioners"]["hosts"]["provisioner-1"];
    assert_eq!(prov["bootstrap_mac"], "52:54:00:12:34:56");
    assert_eq!(prov["location"], "RU20");
}

#[test]
fn jump_host_defaults() {
    let doc = fixture_inventory_yaml();
    let mgen = &doc["all"]["children"]["jump_hosts"]["hosts"]["mgen"];
    assert_eq!(mgen["ansible_host"], "10.48.112.47");
    assert_eq!(mgen["ansible_ssh_private_key_file"], "/runner/.ssh/id_rsa");
}

#[test]
fn rack_units_parsed_from_fixture() {
    let kickstart = load_kickstart(&common::kickstart_path()).unwrap();
    let inventory = convert(&kickstart, &InventoryOptions::default()).unwrap();
    let ru7 = &inventory.groups().bmc_servers.hosts["node_ru7"];
    assert_eq!(ru7["ru_number"], serde_json::json!(7));
}

#[test]
fn null_node_type_rendered_without_type_group() {
    let kickstart: Kickstart = serde_json::from_str(
        r#"{"computeNodeIntegratedManagementModules": [
            {"location": "RU11", "type": null},
            {"location": "RU12"}
        ]}"#,
    )
    .unwrap();
    let inventory = convert(&kickstart, &InventoryOptions::default()).unwrap();
    let doc: Value = serde_yaml::from_str(&inventory.to_yaml().unwrap()).unwrap();
    let children = &doc["all"]["children"];

    let ru11 = &children["bmc_servers"]["hosts"]["node_ru11"];
    assert!(ru11.get("node_type").unwrap().is_null());
    assert_eq!(children["bmc_servers"]["hosts"]["node_ru12"]["node_type"], "compute");
    assert!(children["compute_nodes"]["hosts"].get("node_ru11").is_none());
    assert!(children["compute_nodes"]["hosts"].get("node_ru12").is_some());
}
