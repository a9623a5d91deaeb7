use clap::Parser;
use std::path::PathBuf;

use pc_configurator::application::dto::OutputFormat;
use pc_configurator::build_configuration::domain::BuildCategory;

/// Check a saved PC build against a parts catalog
#[derive(Parser, Debug)]
#[command(name = "pc-configurator")]
#[command(version)]
#[command(
    about = "Check a saved PC build for compatibility issues, price it and list eligible parts",
    long_about = None
)]
pub struct Args {
    /// Catalog file mapping category keys to component lists (.json, .yml, .toml)
    #[arg(short, long, value_name = "PATH")]
    pub catalog: PathBuf,

    /// Build file with selection, peripherals and variant choices
    #[arg(short, long, value_name = "PATH")]
    pub build: PathBuf,

    /// Output format: markdown or json [default: markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// List parts that fit the current build for a slot
    /// Can be specified multiple times: -e gpu -e psu
    #[arg(short, long = "eligible", value_name = "CATEGORY")]
    pub eligible: Vec<BuildCategory>,

    /// Config file path (defaults to pc-configurator.config.yml next to the build file)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when the build has critical compatibility issues
    #[arg(long)]
    pub fail_on_critical: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
