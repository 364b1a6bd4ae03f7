//! # rackforge-inventory
//!
//! Converts a kickstart rack record (BMC-managed nodes, network switches and
//! provisioner hosts) into the grouped inventory document consumed by
//! Ansible/AWX.
//!
//! - [`Kickstart`] -- the flat rack record as parsed from `kickstart.json`.
//! - [`convert`] -- groups the record into an [`Inventory`].
//! - [`InventoryOptions`] -- site-specific values (jump host, BMC addressing).

pub mod convert;
pub mod inventory;
pub mod kickstart;
pub mod options;

pub use convert::{convert, rack_unit_from_location};
pub use inventory::{
    BmcHost, HostGroup, Inventory, InventorySummary, JumpHost, ProvisionerHost, RackUnit,
    SwitchHost,
};
pub use kickstart::{Kickstart, ManagementModule, NetworkInterface, Provisioner, RackInfo, Switch};
pub use options::{InventoryOptions, JumpHostOptions};

use std::path::Path;

/// Load a kickstart record from a JSON (or YAML) file.
pub fn load_kickstart(path: &Path) -> rackforge_common::Result<Kickstart> {
    rackforge_common::load_document(path)
}
