mod config;
mod providers;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dbscope",
    version,
    about = "Inspect the file system providers of a dbscope deployment",
    long_about = "dbscope resolves the virtual file systems a project exposes through its \
                  capabilities. This tool shows which providers are registered and the \
                  resolver configuration in effect."
)]
pub struct Cli {
    /// Resolver configuration file. Defaults to ~/.dbscope/resolver.json when present.
    #[arg(long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Also write logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List registered file system providers in contribution order
    Providers {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the effective resolver configuration as JSON
    #[command(
        long_about = "Loads the configuration file (if any), applies DBSCOPE_* environment \
                      overrides and prints the result."
    )]
    Config,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = dbscope_runtime::init_logging("cli", cli.verbose);

    let config = dbscope_core::ResolverConfig::load_or_default(cli.config.as_deref())?;
    tracing::debug!(?config, "Resolver configuration loaded");

    match cli.command {
        Commands::Providers { json } => providers::run(config, json)?,
        Commands::Config => config::run(&config)?,
    }
    Ok(())
}
