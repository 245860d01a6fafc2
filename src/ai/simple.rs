//! One-ply heuristic player.

use super::{Strategy, ensure_playable};
use crate::error::GameError;
use crate::games::tictactoe::{Board, Mark, Position};
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Wins when it can, blocks when it must, otherwise plays at random.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleAI;

impl SimpleAI {
    /// Creates a new simple AI.
    pub fn new() -> Self {
        Self
    }
}

/// First empty square (row-major) that completes a line for `mark`.
fn completing_square(board: &Board, mark: Mark) -> Option<Position> {
    board
        .empty_cells()
        .into_iter()
        .find(|&pos| board.with_mark(pos, mark).check_win(mark))
}

impl Strategy for SimpleAI {
    #[instrument(skip(self, board), fields(board = %board.display()))]
    fn get_move(&self, board: &Board, mark: Mark) -> Result<Position, GameError> {
        ensure_playable(board)?;

        if let Some(pos) = completing_square(board, mark) {
            debug!(position = %pos, "Taking winning square");
            return Ok(pos);
        }

        if let Some(pos) = completing_square(board, mark.opponent()) {
            debug!(position = %pos, "Blocking opponent");
            return Ok(pos);
        }

        let empty = board.empty_cells();
        let pos = *empty
            .choose(&mut rand::thread_rng())
            .ok_or_else(GameError::terminal_board)?;
        debug!(position = %pos, "Picked random square");
        Ok(pos)
    }

    fn name(&self) -> &str {
        "Simple AI"
    }
}
