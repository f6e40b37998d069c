//! Queryaug CLI
//!
//! Expand seed search queries into lemmatized, synonym, and generated variants.

use anyhow::Result;
use clap::Parser;
use queryaug_core::Config;

mod app;
mod commands;
mod progress;

use app::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(args, &config).await,
        Commands::Augment(args) => commands::augment::run(args, config, cli.verbose).await,
        Commands::Validate(args) => commands::validate::run(args).await,
        Commands::Merge(args) => commands::merge::run(args).await,
    };

    if let Err(ref e) = result {
        if let Some(err) = e.downcast_ref::<queryaug_core::AugmentError>() {
            eprintln!("Error: {:#}", e);
            std::process::exit(err.exit_code());
        }
    }

    result
}
