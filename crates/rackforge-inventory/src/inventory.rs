//! Grouped inventory document.
//!
//! Serializes to the `all.children.<group>.{hosts,vars}` layout Ansible/AWX
//! expects. Field and host order is preserved in the output. Hosts are held as
//! ordered JSON mappings; the typed host records below build them.

use serde::Serialize;
use serde_json::{Map, Value};

/// An inventory group: its hosts plus optional group variables.
///
/// Hosts are kept in insertion order; re-inserting a name replaces the entry
/// in place.
#[derive(Debug, Clone, Serialize)]
pub struct HostGroup<V = ()> {
    pub hosts: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vars: Option<V>,
}

impl<V> HostGroup<V> {
    pub fn new() -> Self {
        Self {
            hosts: Map::new(),
            vars: None,
        }
    }

    pub fn with_vars(vars: V) -> Self {
        Self {
            hosts: Map::new(),
            vars: Some(vars),
        }
    }

    /// Add (or replace) a host with its variables.
    pub fn insert_host<H: Serialize>(
        &mut self,
        name: impl Into<String>,
        host: &H,
    ) -> rackforge_common::Result<()> {
        self.hosts.insert(name.into(), serde_json::to_value(host)?);
        Ok(())
    }

    /// Add a membership-only entry, rendered as `{}`.
    pub fn add_member(&mut self, name: impl Into<String>) {
        self.hosts.insert(name.into(), Value::Object(Map::new()));
    }
}

impl<V> Default for HostGroup<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Rack unit of a node: numeric when the location is `RU<digits>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RackUnit {
    Number(u64),
    Label(String),
}

impl RackUnit {
    pub fn parse(text: &str) -> Self {
        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(number) = text.parse() {
                return RackUnit::Number(number);
            }
        }
        RackUnit::Label(text.to_string())
    }
}

impl std::fmt::Display for RackUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RackUnit::Number(n) => write!(f, "{}", n),
            RackUnit::Label(label) => write!(f, "{}", label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JumpHost {
    pub ansible_host: String,
    pub ansible_user: String,
    pub ansible_ssh_private_key_file: String,
    pub ansible_ssh_common_args: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmcHost {
    pub ansible_host: String,
    pub bmc_ipv6_address: String,
    pub bmc_lla_ip: String,
    pub ru_number: RackUnit,
    pub node_type: Option<String>,
    pub serial_number: String,
    pub mtm: String,
    pub ibm_serial_number: String,
    pub ibm_mtm: String,
    pub uuid: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_mac: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baremetal_mac: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baremetal_interface: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwitchHost {
    pub ansible_host: String,
    pub serial_number: String,
    pub ibm_serial_number: String,
    pub ibm_mtm: String,
    pub model: String,
    pub mac_address: String,
    pub location: String,
    pub switch_type: String,
    pub manufacturer: String,
    pub software_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProvisionerHost {
    pub ansible_host: String,
    pub location: String,
    pub bootstrap_mac: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BmcGroupVars {
    pub ansible_user: String,
    pub ansible_password: String,
    pub bmc_jump_host: String,
    pub bmc_network_interface: String,
    pub bmc_ssh_options: String,
    pub powerrp: String,
    pub failover_mode: String,
}

impl BmcGroupVars {
    pub fn new(jump_host: &str) -> Self {
        Self {
            ansible_user: "USERID".to_string(),
            ansible_password: "{{ vault_imm_password }}".to_string(),
            bmc_jump_host: jump_host.to_string(),
            bmc_network_interface: "eno2".to_string(),
            bmc_ssh_options: "-o StrictHostKeyChecking=no -o UserKnownHostsFile=/dev/null \
                              -o LogLevel=ERROR -o ConnectTimeout=30"
                .to_string(),
            powerrp: "restore".to_string(),
            failover_mode: "shared".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SwitchGroupVars {
    pub ansible_user: String,
    pub ansible_password: String,
    pub ansible_connection: String,
    pub ansible_network_os: String,
}

impl Default for SwitchGroupVars {
    fn default() -> Self {
        Self {
            ansible_user: "cumulus".to_string(),
            ansible_password: "{{ vault_switch_password }}".to_string(),
            ansible_connection: "network_cli".to_string(),
            ansible_network_os: "cumulus".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProvisionerGroupVars {
    pub ansible_user: String,
    pub ansible_password: String,
}

impl Default for ProvisionerGroupVars {
    fn default() -> Self {
        Self {
            ansible_user: "root".to_string(),
            ansible_password: "{{ vault_provisioner_password }}".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InventoryGroups {
    pub jump_hosts: HostGroup,
    pub bmc_servers: HostGroup<BmcGroupVars>,
    pub switches: HostGroup<SwitchGroupVars>,
    pub tor_switches: HostGroup,
    pub mgmt_switches: HostGroup,
    pub provisioners: HostGroup<ProvisionerGroupVars>,
    pub storage_nodes: HostGroup,
    pub compute_nodes: HostGroup,
    pub service_nodes: HostGroup,
}

#[derive(Debug, Clone, Serialize)]
pub struct AllGroup {
    pub children: InventoryGroups,
}

/// The complete inventory document.
#[derive(Debug, Clone, Serialize)]
pub struct Inventory {
    pub all: AllGroup,
}

/// Host counts reported after a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub bmc_servers: usize,
    pub switches: usize,
    pub provisioners: usize,
}

impl Inventory {
    /// An inventory with every group present, no hosts, and the standard
    /// group variables.
    pub fn empty(jump_host: &str) -> Self {
        Self {
            all: AllGroup {
                children: InventoryGroups {
                    jump_hosts: HostGroup::new(),
                    bmc_servers: HostGroup::with_vars(BmcGroupVars::new(jump_host)),
                    switches: HostGroup::with_vars(SwitchGroupVars::default()),
                    tor_switches: HostGroup::new(),
                    mgmt_switches: HostGroup::new(),
                    provisioners: HostGroup::with_vars(ProvisionerGroupVars::default()),
                    storage_nodes: HostGroup::new(),
                    compute_nodes: HostGroup::new(),
                    service_nodes: HostGroup::new(),
                },
            },
        }
    }

    pub fn groups(&self) -> &InventoryGroups {
        &self.all.children
    }

    pub fn groups_mut(&mut self) -> &mut InventoryGroups {
        &mut self.all.children
    }

    pub fn summary(&self) -> InventorySummary {
        let groups = self.groups();
        InventorySummary {
            bmc_servers: groups.bmc_servers.hosts.len(),
            switches: groups.switches.hosts.len(),
            provisioners: groups.provisioners.hosts.len(),
        }
    }

    /// Render as a YAML document.
    pub fn to_yaml(&self) -> rackforge_common::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
