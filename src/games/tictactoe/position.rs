//! Board positions addressed by column and row.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// A position on the tic-tac-toe board.
///
/// Variants are declared in row-major order, so iterating them
/// walks row 0 left to right, then row 1, then row 2. That order decides
/// which square the computer players prefer on ties.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, Default,
)]
pub enum Position {
    /// Column 0, row 0.
    #[default]
    TopLeft,
    /// Column 1, row 0.
    TopCenter,
    /// Column 2, row 0.
    TopRight,
    /// Column 0, row 1.
    MiddleLeft,
    /// Column 1, row 1.
    Center,
    /// Column 2, row 1.
    MiddleRight,
    /// Column 0, row 2.
    BottomLeft,
    /// Column 1, row 2.
    BottomCenter,
    /// Column 2, row 2.
    BottomRight,
}

/// Direction of a cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 2.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 2.
    Right,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Creates a position from `(col, row)`, or `None` when either is out of range.
    #[instrument]
    pub fn from_coords(col: usize, row: usize) -> Option<Self> {
        if col >= BOARD_SIZE || row >= BOARD_SIZE {
            return None;
        }
        Self::from_index(row * BOARD_SIZE + col)
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.to_index() % BOARD_SIZE
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.to_index() / BOARD_SIZE
    }

    /// `(col, row)` pair.
    pub fn coords(self) -> (usize, usize) {
        (self.col(), self.row())
    }

    /// Moves one square in `direction`, wrapping around the board edge.
    pub fn step(self, direction: Direction) -> Self {
        let (col, row) = self.coords();
        let (col, row) = match direction {
            Direction::Up => (col, (row + BOARD_SIZE - 1) % BOARD_SIZE),
            Direction::Down => (col, (row + 1) % BOARD_SIZE),
            Direction::Left => ((col + BOARD_SIZE - 1) % BOARD_SIZE, row),
            Direction::Right => ((col + 1) % BOARD_SIZE, row),
        };
        Self::ALL[row * BOARD_SIZE + col]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
