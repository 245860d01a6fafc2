//! Terminal front end: crossterm keyboard input and ratatui drawing.

mod input;
mod ui;

pub use input::{KeyboardInput, map_key};
pub use ui::{TerminalScreen, draw};

use crate::config::GameConfig;
use crate::lobby::GameController;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

/// Runs its restore action when dropped, on every exit path.
struct RestoreGuard<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

/// Leaves raw mode and the alternate screen. Failures are logged only.
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        error!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        error!(error = %e, "Failed to leave alternate screen");
    }
}

/// Takes over the terminal and plays until the user quits.
///
/// The terminal is restored before any error is returned, including errors
/// from setting it up.
#[instrument(skip(config))]
pub async fn run_tui(config: GameConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let _restore = RestoreGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    // Declared after the guard, so it drops first and the keyboard reader
    // stops before the terminal is restored.
    let mut controller = GameController::new(
        KeyboardInput::spawn(),
        TerminalScreen::new(terminal),
        config.computer_delay(),
    );

    let res = controller.run().await;
    if let Err(err) = &res {
        error!(error = %err, "Game loop error");
    }
    Ok(res?)
}
