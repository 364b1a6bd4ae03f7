//! Site-specific values that the kickstart record does not carry.

use serde::{Deserialize, Serialize};

/// Options for [`convert`](crate::convert).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InventoryOptions {
    /// Host used to reach the BMC network.
    pub jump_host: JumpHostOptions,

    /// First three octets of the BMC address; the rack unit is appended.
    pub bmc_address_prefix: String,
}

impl Default for InventoryOptions {
    fn default() -> Self {
        Self {
            jump_host: JumpHostOptions::default(),
            bmc_address_prefix: "169.253.1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct JumpHostOptions {
    pub name: String,
    pub address: String,
    pub user: String,
    pub ssh_private_key_file: String,
    pub ssh_common_args: String,
}

impl Default for JumpHostOptions {
    fn default() -> Self {
        Self {
            name: "mgen".to_string(),
            address: "10.48.112.47".to_string(),
            user: "root".to_string(),
            ssh_private_key_file: "/runner/.ssh/id_rsa".to_string(),
            ssh_common_args:
                "-o StrictHostKeyChecking=no -o UserKnownHostsFile=/dev/null -o LogLevel=ERROR"
                    .to_string(),
        }
    }
}
