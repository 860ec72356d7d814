//! Broodlog CLI - Command-line interface for the diagnostic log
//!
//! Provides commands for:
//! - Listing recorded diagnostic events
//! - Showing one event in full
//! - Clearing the persisted log

use std::path::PathBuf;

use anyhow::Result;
use broodlog_core::config::Config;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::log::LogCommand;

#[derive(Debug, Parser)]
#[command(name = "broodlog", version, about = "Hatchery record keeping diagnostics")]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// View and manage the persisted diagnostic log
    #[command(subcommand)]
    Log(LogCommand),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load_or_default(&config_path);

    match &cli.command {
        Commands::Log(cmd) => cmd.execute(&config, cli.json).await,
    }
}
