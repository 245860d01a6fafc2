//! Game error types.

use crate::games::tictactoe::MoveError;
use derive_more::{Display, Error};

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameErrorKind {
    /// Placement on an occupied or off-board square. Recovered locally.
    #[display("Invalid move: {}", _0)]
    InvalidMove(MoveError),

    /// The player asked to leave the current game.
    #[display("User exited to menu")]
    UserExitedToMenu,

    /// The input collaborator stopped producing events.
    #[display("Input source failure: {}", _0)]
    InputSourceFailure(#[error(not(source))] String),

    /// A computer player was asked to move on a finished board.
    #[display("Computer player invoked on a terminal board")]
    AgentInvokedOnTerminalBoard,

    /// The display collaborator could not draw.
    #[display("Display failure: {}", _0)]
    DisplayFailure(#[error(not(source))] String),
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct GameError {
    /// Error kind.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// The player cancelled out of the game.
    #[track_caller]
    pub fn user_exited() -> Self {
        Self::new(GameErrorKind::UserExitedToMenu)
    }

    /// The input source failed.
    #[track_caller]
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(GameErrorKind::InputSourceFailure(message.into()))
    }

    /// The display failed.
    #[track_caller]
    pub fn display(message: impl Into<String>) -> Self {
        Self::new(GameErrorKind::DisplayFailure(message.into()))
    }

    /// A strategy was handed a finished board.
    #[track_caller]
    pub fn terminal_board() -> Self {
        Self::new(GameErrorKind::AgentInvokedOnTerminalBoard)
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &GameErrorKind {
        &self.kind
    }

    /// True for the cancellation signal that unwinds to the menu.
    pub fn is_exit_to_menu(&self) -> bool {
        self.kind == GameErrorKind::UserExitedToMenu
    }
}

impl From<MoveError> for GameError {
    #[track_caller]
    fn from(err: MoveError) -> Self {
        Self::new(GameErrorKind::InvalidMove(err))
    }
}
