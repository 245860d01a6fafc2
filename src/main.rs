//! tui_tictactoe - terminal tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tui_tictactoe::{Cli, GameConfig, VersionInfo, tui};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.version {
        println!("{}", VersionInfo::current().banner());
        return Ok(());
    }

    let config = GameConfig::load_or_default(&cli.config)?;
    initialize_tracing(&config)?;
    info!(config = ?config, "Configuration loaded");

    tui::run_tui(config).await
}

/// Sends logs to the configured file so they do not interfere with the TUI.
fn initialize_tracing(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}
