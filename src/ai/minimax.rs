//! Exhaustive game-tree search.

use super::{Strategy, ensure_playable};
use crate::error::GameError;
use crate::games::tictactoe::{Board, Mark, Position};
use tracing::{debug, instrument};

/// Score of a win found at depth 0.
const WIN_SCORE: i32 = 10;

/// Plays perfect tic-tac-toe by searching every line to the end.
///
/// Wins score `10 - depth` and losses `depth - 10`, so among equal outcomes
/// the engine prefers the quickest win and the slowest loss. Ties between
/// squares go to the first one in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxAI;

impl MinimaxAI {
    /// Creates a new minimax AI.
    pub fn new() -> Self {
        Self
    }

    /// Scores `board` from `original`'s point of view.
    ///
    /// `depth` counts plies after the move under evaluation.
    pub fn minimax(board: &Board, depth: i32, maximizing: bool, original: Mark) -> i32 {
        let opponent = original.opponent();

        if board.check_win(original) {
            return WIN_SCORE - depth;
        }
        if board.check_win(opponent) {
            return depth - WIN_SCORE;
        }
        // No line for either side, so a full board is a draw.
        let empty = board.empty_cells();
        if empty.is_empty() {
            return 0;
        }

        let to_play = if maximizing { original } else { opponent };
        let scores = empty.into_iter().map(|pos| {
            Self::minimax(&board.with_mark(pos, to_play), depth + 1, !maximizing, original)
        });

        if maximizing {
            scores.max().unwrap_or(0)
        } else {
            scores.min().unwrap_or(0)
        }
    }
}

impl Strategy for MinimaxAI {
    #[instrument(skip(self, board), fields(board = %board.display()))]
    fn get_move(&self, board: &Board, mark: Mark) -> Result<Position, GameError> {
        ensure_playable(board)?;

        let mut best: Option<(Position, i32)> = None;
        for pos in board.empty_cells() {
            let score = Self::minimax(&board.with_mark(pos, mark), 0, false, mark);
            // Strictly greater keeps the first square on ties.
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((pos, score));
            }
        }

        let (pos, score) = best.ok_or_else(GameError::terminal_board)?;
        debug!(position = %pos, score, "Minimax chose square");
        Ok(pos)
    }

    fn name(&self) -> &str {
        "Minimax AI"
    }
}
