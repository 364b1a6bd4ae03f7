//! Kickstart rack record as produced by the rack manufacturing flow.
//!
//! Every field is optional; absent and `null` values read as `None` and
//! unknown fields are ignored. The node `type` is the exception: it keeps an
//! explicit `null` apart from an absent key.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Kickstart {
    pub rack_info: RackInfo,
    pub compute_node_integrated_management_modules: Vec<ManagementModule>,
    pub switches: Vec<Switch>,
    pub provisioners: Vec<Provisioner>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RackInfo {
    pub serial: Option<String>,
}

/// A node's integrated management module (BMC).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ManagementModule {
    pub name: Option<String>,
    /// Rack position, e.g. `RU12`.
    pub location: Option<String>,
    /// `compute`, `storage` or `servicenode`. `None` when the key is absent,
    /// `Some(None)` when it is `null`.
    #[serde(rename = "type", deserialize_with = "present")]
    pub node_type: Option<Option<String>>,
    #[serde(rename = "ipv6ULA")]
    pub ipv6_ula: Option<String>,
    #[serde(rename = "ipv6LLA")]
    pub ipv6_lla: Option<String>,
    pub serial_num: Option<String>,
    pub mtm: Option<String>,
    pub ibm_serial_number: Option<String>,
    #[serde(rename = "ibmMTM")]
    pub ibm_mtm: Option<String>,
    pub uuid: Option<String>,
    pub network_interfaces: Vec<NetworkInterface>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkInterface {
    /// `provisioning` or `baremetal`; others are ignored.
    pub interface_type: Option<String>,
    pub mac_address: Option<String>,
    pub interface_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Switch {
    pub name: Option<String>,
    pub location: Option<String>,
    /// `tor_network_switch` or `internal_management_switch`.
    #[serde(rename = "switch_type")]
    pub switch_type: Option<String>,
    pub ipv6: Option<String>,
    pub serial: Option<String>,
    pub ibm_serial_number: Option<String>,
    #[serde(rename = "ibmMTM")]
    pub ibm_mtm: Option<String>,
    pub model: Option<String>,
    pub mac_addr: Option<String>,
    pub manufacturer: Option<String>,
    pub softver: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Provisioner {
    pub name: Option<String>,
    pub location: Option<String>,
    pub ipv6: Option<String>,
    #[serde(rename = "bootstrapMACAddress")]
    pub bootstrap_mac_address: Option<String>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
