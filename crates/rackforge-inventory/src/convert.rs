//! Kickstart record to inventory conversion.

use crate::inventory::{BmcHost, Inventory, JumpHost, ProvisionerHost, RackUnit, SwitchHost};
use crate::kickstart::{Kickstart, ManagementModule, Provisioner, Switch};
use crate::options::InventoryOptions;

const UNKNOWN_NAME: &str = "unknown";

/// Strip the `RU` prefix from a rack location (`RU12` -> `12`); other
/// locations are returned unchanged.
pub fn rack_unit_from_location(location: &str) -> &str {
    location.strip_prefix("RU").unwrap_or(location)
}

/// Group a kickstart record into an inventory.
///
/// BMCs land in `bmc_servers` (plus a node-type group), switches in
/// `switches` (plus a switch-type group) and provisioners in `provisioners`.
/// Records with the same host name overwrite earlier ones.
pub fn convert(
    kickstart: &Kickstart,
    options: &InventoryOptions,
) -> rackforge_common::Result<Inventory> {
    tracing::info!(
        "Converting kickstart record for rack {}",
        kickstart.rack_info.serial.as_deref().unwrap_or("unknown")
    );

    let mut inventory = Inventory::empty(&options.jump_host.name);
    add_jump_host(&mut inventory, options)?;

    for node in &kickstart.compute_node_integrated_management_modules {
        add_management_module(&mut inventory, node, options)?;
    }
    for switch in &kickstart.switches {
        add_switch(&mut inventory, switch)?;
    }
    for provisioner in &kickstart.provisioners {
        add_provisioner(&mut inventory, provisioner)?;
    }

    let summary = inventory.summary();
    tracing::debug!(
        bmc_servers = summary.bmc_servers,
        switches = summary.switches,
        provisioners = summary.provisioners,
        "Inventory conversion complete"
    );
    Ok(inventory)
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn add_jump_host(
    inventory: &mut Inventory,
    options: &InventoryOptions,
) -> rackforge_common::Result<()> {
    let jump = &options.jump_host;
    inventory.groups_mut().jump_hosts.insert_host(
        jump.name.clone(),
        &JumpHost {
            ansible_host: jump.address.clone(),
            ansible_user: jump.user.clone(),
            ansible_ssh_private_key_file: jump.ssh_private_key_file.clone(),
            ansible_ssh_common_args: jump.ssh_common_args.clone(),
        },
    )
}

fn add_management_module(
    inventory: &mut Inventory,
    node: &ManagementModule,
    options: &InventoryOptions,
) -> rackforge_common::Result<()> {
    let location = text(&node.location);
    let ru = rack_unit_from_location(&location);
    // An absent type defaults to compute; an explicit null stays untyped.
    let node_type = match &node.node_type {
        None => Some("compute"),
        Some(node_type) => node_type.as_deref(),
    };
    let hostname = format!("node_ru{}", ru);

    tracing::debug!(
        "BMC {} at {} -> {}",
        node.name.as_deref().unwrap_or(UNKNOWN_NAME),
        location,
        hostname
    );

    let mut host = BmcHost {
        ansible_host: format!("{}.{}", options.bmc_address_prefix, ru),
        bmc_ipv6_address: text(&node.ipv6_ula),
        bmc_lla_ip: text(&node.ipv6_lla),
        ru_number: RackUnit::parse(ru),
        node_type: node_type.map(str::to_string),
        serial_number: text(&node.serial_num),
        mtm: text(&node.mtm),
        ibm_serial_number: text(&node.ibm_serial_number),
        ibm_mtm: text(&node.ibm_mtm),
        uuid: text(&node.uuid),
        location: location.clone(),
        provisioning_mac: None,
        provisioning_interface: None,
        baremetal_mac: None,
        baremetal_interface: None,
    };

    for iface in &node.network_interfaces {
        match iface.interface_type.as_deref() {
            Some("provisioning") => {
                host.provisioning_mac = Some(text(&iface.mac_address));
                host.provisioning_interface = Some(text(&iface.interface_name));
            }
            Some("baremetal") => {
                host.baremetal_mac = Some(text(&iface.mac_address));
                host.baremetal_interface = Some(text(&iface.interface_name));
            }
            _ => {}
        }
    }

    let groups = inventory.groups_mut();
    groups.bmc_servers.insert_host(hostname.clone(), &host)?;

    let type_group = match node_type {
        Some("storage") => Some(&mut groups.storage_nodes),
        Some("compute") => Some(&mut groups.compute_nodes),
        Some("servicenode") => Some(&mut groups.service_nodes),
        Some(other) => {
            tracing::warn!("Node {} has unrecognized type '{}'", hostname, other);
            None
        }
        None => {
            tracing::warn!("Node {} has a null type", hostname);
            None
        }
    };
    if let Some(group) = type_group {
        group.add_member(hostname);
    }
    Ok(())
}

fn add_switch(inventory: &mut Inventory, switch: &Switch) -> rackforge_common::Result<()> {
    let name = switch
        .name
        .clone()
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());
    let switch_type = text(&switch.switch_type);

    let host = SwitchHost {
        ansible_host: text(&switch.ipv6),
        serial_number: text(&switch.serial),
        ibm_serial_number: text(&switch.ibm_serial_number),
        ibm_mtm: text(&switch.ibm_mtm),
        model: text(&switch.model),
        mac_address: text(&switch.mac_addr),
        location: text(&switch.location),
        switch_type: switch_type.clone(),
        manufacturer: text(&switch.manufacturer),
        software_version: text(&switch.softver),
    };

    let groups = inventory.groups_mut();
    groups.switches.insert_host(name.clone(), &host)?;

    match switch_type.as_str() {
        "tor_network_switch" => groups.tor_switches.add_member(name),
        "internal_management_switch" => groups.mgmt_switches.add_member(name),
        _ => {}
    }
    Ok(())
}

fn add_provisioner(
    inventory: &mut Inventory,
    provisioner: &Provisioner,
) -> rackforge_common::Result<()> {
    let name = provisioner
        .name
        .clone()
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());

    inventory.groups_mut().provisioners.insert_host(
        name,
        &ProvisionerHost {
            ansible_host: text(&provisioner.ipv6),
            location: text(&provisioner.location),
            bootstrap_mac: text(&provisioner.bootstrap_mac_address),
        },
    )
}
