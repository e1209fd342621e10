//! Catalog entity registry inspector
//!
//! Bootstraps the same registry the UI uses and prints what it knows:
//!
//! Usage:
//!   catalog types
//!   catalog capable glossary-terms
//!   catalog render --file dataset.json --view profile

use anyhow::{Context, Result};
use catalog_cli::{load_search_result, render, summarize_types, View};
use catalog_entities::{build_entity_registry, translator_from_config};
use catalog_registry::RegistryConfig;
use catalog_types::{Capability, EntityType};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(about = "Inspect the metadata catalog entity registry")]
struct Args {
    /// Path to the registry config file
    #[arg(short, long, default_value = "catalog.toml")]
    config: PathBuf,

    /// JSON message catalog, overriding the config file
    #[arg(short, long)]
    messages: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered entity types
    Types,
    /// List entity types supporting a capability
    Capable {
        capability: Capability,
    },
    /// Render an entity JSON file through its handler
    Render {
        /// Entity type, when the file does not name one
        #[arg(short = 't', long = "type")]
        entity_type: Option<EntityType>,

        #[arg(short, long)]
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = View::Preview)]
        view: View,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let mut config = RegistryConfig::load_from(&args.config)
        .with_context(|| format!("Failed to load config {:?}", args.config))?;
    if let Some(messages) = args.messages {
        config.messages = Some(messages);
    }
    debug!(?config, "Registry config");

    let translator = translator_from_config(&config).context("Failed to load translations")?;
    let registry = build_entity_registry(translator, &config).context("Failed to build registry")?;

    match args.command {
        Command::Types => print_json(&summarize_types(&registry))?,
        Command::Capable { capability } => {
            let types = registry.get_types_with_supported_capabilities(capability);
            info!(%capability, count = types.len(), "Capability query");
            print_json(&types)?;
        }
        Command::Render {
            entity_type,
            file,
            view,
        } => {
            let result = load_search_result(&file, entity_type)?;
            print_json(&render(&registry, entity_type, view, &result)?)?;
        }
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
