use clap::{Parser, Subcommand};
use rackforge_common::DocumentFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rackforge")]
#[command(author, version, about = "Rack bring-up tooling for BMC settings and inventories")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Select the settings that apply to a machine from a rule set
    Select {
        /// Rule set file (JSON or YAML)
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Property file describing the machine (JSON or YAML)
        #[arg(long)]
        properties: Option<PathBuf>,

        /// Machine property as a string, repeatable (e.g. -p model=SR650);
        /// use KEY:=JSON for a typed scalar (e.g. -p cores:=32)
        #[arg(short = 'p', long = "property", value_name = "KEY=VALUE")]
        property: Vec<String>,

        /// Output format: json or yaml
        #[arg(short, long)]
        format: Option<DocumentFormat>,

        /// Print the names of the satisfied rules to stderr
        #[arg(long)]
        explain: bool,
    },

    /// Check a rule set for entries that can never apply
    Check {
        /// Rule set file (JSON or YAML)
        #[arg(short, long)]
        rules: PathBuf,

        /// Output findings as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a kickstart record into an Ansible/AWX inventory
    Inventory {
        /// Kickstart JSON file
        #[arg(required = true)]
        input: PathBuf,

        /// Inventory YAML file to write
        #[arg(required = true)]
        output: PathBuf,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
