//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::error::GameError;
use crate::games::tictactoe::{Board, Mark, Position};
use crate::interface::{GameView, InputSource, Screen, View};
use crate::session::GameMode;

/// What a player sees and may touch while choosing a move.
pub struct MoveContext<'a> {
    /// Copy of the live board.
    pub board: Board,
    /// Mark being played.
    pub mark: Mark,
    /// Mode of the session.
    pub mode: GameMode,
    /// Session cursor, moved by human players.
    pub cursor: &'a mut Position,
    /// Input events.
    pub input: &'a mut dyn InputSource,
    /// Display for redraws during the turn.
    pub screen: &'a mut dyn Screen,
}

impl MoveContext<'_> {
    /// Redraws the board with the cursor visible.
    pub fn redraw(&mut self, message: &str) -> Result<(), GameError> {
        self.screen.render(&View::Game(GameView {
            board: &self.board,
            mode: self.mode,
            cursor: Some(*self.cursor),
            message,
        }))
    }
}

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player.
    ///
    /// Returns an empty position on the context's board, or
    /// `UserExitedToMenu` when the user cancels the game.
    async fn get_move(&mut self, ctx: &mut MoveContext<'_>) -> Result<Position, GameError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// True when moves come from the keyboard.
    fn is_human(&self) -> bool;
}

/// Turn indicator shown while `name` is to move.
pub fn turn_message(name: &str) -> String {
    format!("{}'s turn", name)
}
