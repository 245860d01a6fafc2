//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::rules;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

/// Rejected placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The target square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The coordinates fall outside the 3x3 grid.
    #[display("Coordinates ({}, {}) are off the board", col, row)]
    OutOfBounds {
        /// Requested column.
        col: usize,
        /// Requested row.
        row: usize,
    },
}

/// 3x3 tic-tac-toe board.
///
/// The board is `Copy`, so hypothetical moves are simulated on a copy and
/// never touch the live game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if the square at `(col, row)` is empty.
    ///
    /// Out-of-range coordinates are never empty.
    pub fn is_cell_empty(&self, col: usize, row: usize) -> bool {
        Position::from_coords(col, row).is_some_and(|pos| self.is_empty(pos))
    }

    /// Places `mark` at `(col, row)`.
    ///
    /// This is the only way a board changes. A failed placement leaves the
    /// board untouched.
    #[instrument(skip(self))]
    pub fn place(&mut self, col: usize, row: usize, mark: Mark) -> Result<(), MoveError> {
        let pos =
            Position::from_coords(col, row).ok_or(MoveError::OutOfBounds { col, row })?;
        self.place_at(pos, mark)
    }

    /// Places `mark` at `pos`.
    pub fn place_at(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            debug!(position = %pos, "Rejected placement on occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(mark);
        Ok(())
    }

    /// Returns a copy of this board with `mark` at `pos`.
    ///
    /// The caller guarantees `pos` is empty.
    pub(crate) fn with_mark(mut self, pos: Position, mark: Mark) -> Self {
        self.squares[pos.to_index()] = Square::Occupied(mark);
        self
    }

    /// True iff `mark` holds any row, column or diagonal.
    pub fn check_win(&self, mark: Mark) -> bool {
        rules::has_line(self, mark)
    }

    /// True iff the board is full and neither mark holds a line.
    pub fn check_draw(&self) -> bool {
        rules::is_draw(self)
    }

    /// Returns the mark holding a line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// True when the game on this board is over.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || rules::is_full(self)
    }

    /// Empty positions in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::iter().filter(|pos| self.is_empty(*pos)).collect()
    }

    /// Number of squares holding `mark`.
    pub fn mark_count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|sq| **sq == Square::Occupied(mark))
            .count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => ' ',
                    Square::Occupied(Mark::X) => 'X',
                    Square::Occupied(Mark::O) => 'O',
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
