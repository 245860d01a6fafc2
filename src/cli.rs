//! Command-line interface for tui_tictactoe.

use clap::Parser;

/// Terminal tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tui_tictactoe")]
#[command(about = "Terminal tic-tac-toe", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version and exit
    #[arg(short = 'V', long)]
    pub version: bool,

    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "tui_tictactoe.toml")]
    pub config: std::path::PathBuf,
}
