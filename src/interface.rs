//! Narrow interfaces to the terminal.
//!
//! The game never talks to crossterm or ratatui directly. It pulls
//! [`InputEvent`]s from an [`InputSource`] and pushes [`View`]s to a
//! [`Screen`].

use crate::error::GameError;
use crate::games::tictactoe::{Board, Direction, Position};
use crate::session::GameMode;

/// A discrete input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Cursor or selector up.
    MoveUp,
    /// Cursor or selector down.
    MoveDown,
    /// Cursor left.
    MoveLeft,
    /// Cursor right.
    MoveRight,
    /// Place a mark, pick a menu entry, or acknowledge a result.
    Confirm,
    /// Leave the current game, or quit from the menu.
    Cancel,
}

impl InputEvent {
    /// Cursor direction for movement events.
    pub fn direction(self) -> Option<Direction> {
        match self {
            InputEvent::MoveUp => Some(Direction::Up),
            InputEvent::MoveDown => Some(Direction::Down),
            InputEvent::MoveLeft => Some(Direction::Left),
            InputEvent::MoveRight => Some(Direction::Right),
            InputEvent::Confirm | InputEvent::Cancel => None,
        }
    }
}

/// Blocking source of input events.
///
/// The sequence is infinite and not restartable. A failure is fatal.
#[async_trait::async_trait]
pub trait InputSource: Send {
    /// Waits for the next event.
    async fn next_event(&mut self) -> Result<InputEvent, GameError>;
}

/// Data needed to draw the mode menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView<'a> {
    /// Modes in display order.
    pub options: &'a [GameMode],
    /// Index of the highlighted mode.
    pub selected: usize,
}

/// Data needed to draw a game in progress or a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView<'a> {
    /// The live board.
    pub board: &'a Board,
    /// Mode of the session.
    pub mode: GameMode,
    /// Cursor, present only while a human is choosing a square.
    pub cursor: Option<Position>,
    /// Turn indicator or outcome line.
    pub message: &'a str,
}

/// Everything a screen may be asked to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    /// Mode selection.
    Menu(MenuView<'a>),
    /// Board.
    Game(GameView<'a>),
}

/// Draws views. Called once per state change.
pub trait Screen: Send {
    /// Draws `view`.
    fn render(&mut self, view: &View<'_>) -> Result<(), GameError>;
}
