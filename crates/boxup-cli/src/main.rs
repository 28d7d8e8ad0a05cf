//! boxup CLI - mirror local files into Box
//!
//! Provides commands for:
//! - Uploading a local file or directory tree into a remote folder

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use boxup_core::config::Config;
use commands::upload::UploadCommand;

#[derive(Debug, Parser)]
#[command(name = "boxup", version, about = "Mirror local files into Box")]
pub struct Cli {
    /// Box API access token (falls back to $BOX_ACCESS_TOKEN)
    #[arg(long, global = true)]
    access_token: Option<String>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Upload a local file or directory into a remote folder
    Upload(UploadCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::default_path);
    let config = Config::load_or_default(&config_path);

    // Setup tracing; -v flags override the configured level.
    let filter = match cli.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Upload(cmd) => cmd.execute(cli.access_token.as_deref(), &config).await,
    }
}
