//! Command-line entry point for preparing railway routing service config.

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{info, warn};
use railway_routing::{
    init_logging, parse_property, prepare_config, resolve_config_path, snapshot_from_pairs,
};
use std::path::PathBuf;

/// Command-line options for the service.
#[derive(Parser)]
#[command(name = "railway-routing", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the config, apply property overrides, and print the effective config
    Check {
        /// Path to a YAML or JSON5 service config
        config: Option<PathBuf>,
        /// Launch property, e.g. -Ddw.graphhopper.graph.location=/var/graph
        #[arg(short = 'D', value_name = "KEY=VALUE", value_parser = parse_property)]
        properties: Vec<(String, String)>,
        /// Print the effective config as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Command::Check {
            config,
            properties,
            json,
        } => {
            info!(
                "checking config (config_set={}, properties={})",
                config.is_some(),
                properties.len()
            );
            let cwd = std::env::current_dir().context("failed to resolve current working directory")?;
            let path = resolve_config_path(config.as_deref(), &cwd)?;
            let snapshot = snapshot_from_pairs(properties);
            let prepared = prepare_config(&path, &snapshot)?;
            if !prepared.report.unsupported.is_empty() {
                warn!(
                    "ignored {} unsupported override properties",
                    prepared.report.unsupported.len()
                );
            }
            if json {
                println!("{}", prepared.to_json()?);
            } else {
                println!("{}", prepared.summary());
            }
        }
    }
    Ok(())
}
