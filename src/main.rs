// src/main.rs
use anyhow::Result;
use clap::Parser;
use peerwork_settings::cli::Cli;
use peerwork_settings::config::AppConfig;
use peerwork_settings::settings::cli_handler::execute_command;

fn main() -> Result<()> {
    // Initialize environment
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Parse command line arguments
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    execute_command(cli.command, config)
}
