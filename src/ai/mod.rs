//! Computer strategies.
//!
//! A strategy is a pure function of the board and the mark it plays. It
//! reads the board by reference and simulates on copies, so the live game
//! is never changed by a search.

mod minimax;
mod simple;

pub use minimax::MinimaxAI;
pub use simple::SimpleAI;

use crate::error::GameError;
use crate::games::tictactoe::{Board, Mark, Position};

/// A computer strategy that picks a square.
pub trait Strategy: Send + Sync {
    /// Chooses an empty square for `mark`.
    ///
    /// Fails with `AgentInvokedOnTerminalBoard` if the game on `board` is
    /// already over.
    fn get_move(&self, board: &Board, mark: Mark) -> Result<Position, GameError>;

    /// Returns the strategy's display name.
    fn name(&self) -> &str;
}

/// Rejects boards with nothing left to play.
#[track_caller]
pub(crate) fn ensure_playable(board: &Board) -> Result<(), GameError> {
    if board.is_terminal() {
        tracing::error!(board = %board.display(), "Strategy invoked on a terminal board");
        return Err(GameError::terminal_board());
    }
    Ok(())
}
