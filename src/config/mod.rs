mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./rackforge.toml",
        "~/.config/rackforge/config.toml",
        "/etc/rackforge/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    let jump = &config.inventory.jump_host;
    if jump.name.trim().is_empty() {
        anyhow::bail!("Jump host name cannot be empty");
    }
    if jump.address.trim().is_empty() {
        anyhow::bail!("Jump host '{}' has no address", jump.name);
    }
    if config.inventory.bmc_address_prefix.trim().is_empty() {
        anyhow::bail!("BMC address prefix cannot be empty");
    }

    if let Some(ref rules) = config.selection.rules {
        if !rules.exists() {
            tracing::warn!("Default rule set does not exist: {:?}", rules);
        }
    }

    Ok(())
}
