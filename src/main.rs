mod cli;

use rackforge::{config, properties};
use rackforge_common::{load_document, DocumentFormat};
use rackforge_inventory::{convert, load_kickstart};
use rackforge_rules::{diagnose, SettingsSelector};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use serde_json::Value;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "rackforge=trace,rackforge_rules=trace,rackforge_inventory=debug,rackforge_common=debug"
                .to_string()
        } else {
            "rackforge=info,rackforge_rules=info,rackforge_inventory=info,rackforge_common=warn"
                .to_string()
        }
    });

    // Logs go to stderr so selected settings on stdout stay machine readable
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Select {
            rules,
            properties,
            property,
            format,
            explain,
        } => select_settings(
            cli.config.as_deref(),
            rules,
            properties.as_deref(),
            &property,
            format,
            explain,
        ),
        Commands::Check { rules, json } => check_rules(&rules, json),
        Commands::Inventory { input, output } => {
            build_inventory(&input, &output, cli.config.as_deref())
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("rackforge {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn load_rule_set(path: &Path) -> Result<Value> {
    if !path.exists() {
        anyhow::bail!("Rule set does not exist: {:?}", path);
    }
    load_document(path).with_context(|| format!("Failed to load rule set: {:?}", path))
}

fn select_settings(
    config_path: Option<&Path>,
    rules: Option<PathBuf>,
    properties_path: Option<&Path>,
    overrides: &[String],
    format: Option<DocumentFormat>,
    explain: bool,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    let rules_path = rules
        .or(config.selection.rules)
        .context("No rule set given; pass --rules or set selection.rules in the config")?;
    let rule_set = load_rule_set(&rules_path)?;

    let properties = properties::build_properties(properties_path, overrides)
        .context("Failed to build property set")?;

    let selector = SettingsSelector::new(rule_set);
    tracing::debug!(
        "Evaluating {} rule entries from {:?}",
        selector.rule_names().len(),
        rules_path
    );

    if explain {
        let matched = selector.matching_rules(&properties);
        eprintln!("Satisfied rules: {}", matched.len());
        for name in matched {
            eprintln!("  {}", name);
        }
    }

    let settings = Value::Object(selector.select(&properties));
    let output = match format.or(config.selection.format).unwrap_or(DocumentFormat::Json) {
        DocumentFormat::Json => serde_json::to_string_pretty(&settings)?,
        DocumentFormat::Yaml => serde_yaml::to_string(&settings)?,
    };
    println!("{}", output.trim_end());

    Ok(())
}

fn check_rules(path: &Path, json: bool) -> Result<()> {
    let rule_set = load_rule_set(path)?;
    let findings = diagnose(&rule_set);
    let errors = findings.iter().filter(|d| d.is_error()).count();

    if json {
        println!("{}", serde_json::to_string_pretty(&findings)?);
    } else {
        for finding in &findings {
            println!("{}", finding);
        }
        println!(
            "{} error(s), {} warning(s)",
            errors,
            findings.len() - errors
        );
    }

    if errors > 0 {
        anyhow::bail!("Rule set {:?} has {} error(s)", path, errors);
    }

    if !json {
        println!("✓ Rule set is valid");
    }
    Ok(())
}

fn build_inventory(input: &Path, output: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    if !input.exists() {
        anyhow::bail!("Input file does not exist: {:?}", input);
    }

    println!("Loading kickstart data from: {}", input.display());
    let kickstart = load_kickstart(input)
        .with_context(|| format!("Failed to parse kickstart file: {:?}", input))?;

    println!("Converting to AWX inventory format...");
    let inventory = convert(&kickstart, &config.inventory)
        .with_context(|| format!("Failed to convert kickstart file: {:?}", input))?;

    println!("Writing inventory to: {}", output.display());
    let yaml = inventory.to_yaml()?;
    std::fs::write(output, yaml)
        .with_context(|| format!("Failed to write inventory file: {:?}", output))?;

    let summary = inventory.summary();
    println!("\n✓ Inventory YAML created successfully");
    println!("\nSummary:");
    println!("  BMC Servers: {}", summary.bmc_servers);
    println!("  Switches: {}", summary.switches);
    println!("  Provisioners: {}", summary.provisioners);
    println!("\nOutput file: {}", output.display());
    println!("\nBefore use, review:");
    println!(
        "  1. Jump host ({}) address and credentials",
        config.inventory.jump_host.name
    );
    println!("  2. Vault variables for passwords (vault_imm_password, vault_switch_password, vault_provisioner_password)");
    println!("  3. BMC IPv4 addresses if not using IPv6");
    println!("  4. Network interface names for your environment");

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!(
                "  Jump host: {} ({})",
                config.inventory.jump_host.name, config.inventory.jump_host.address
            );
            println!("  BMC address prefix: {}", config.inventory.bmc_address_prefix);
            match config.selection.rules {
                Some(ref rules) => println!("  Default rule set: {}", rules.display()),
                None => println!("  Default rule set: none"),
            }
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!(
                "  Jump host: {} ({})",
                config.inventory.jump_host.name, config.inventory.jump_host.address
            );
            println!("  BMC address prefix: {}", config.inventory.bmc_address_prefix);
        }
    }

    Ok(())
}
