//! Human player that gets input from keyboard.

use super::{MoveContext, Player, turn_message};
use crate::error::GameError;
use crate::games::tictactoe::Position;
use crate::interface::InputEvent;
use tracing::{debug, instrument};

/// Human player driving the session cursor.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for HumanPlayer {
    fn default() -> Self {
        Self::new("Human")
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    #[instrument(skip(self, ctx), fields(mark = %ctx.mark))]
    async fn get_move(&mut self, ctx: &mut MoveContext<'_>) -> Result<Position, GameError> {
        loop {
            let event = ctx.input.next_event().await?;
            match event {
                InputEvent::Confirm => {
                    let cursor = *ctx.cursor;
                    if ctx.board.is_empty(cursor) {
                        debug!(position = %cursor, "Human chose square");
                        return Ok(cursor);
                    }
                    debug!(position = %cursor, "Square taken, waiting for another choice");
                }
                InputEvent::Cancel => {
                    debug!("Human left the game");
                    return Err(GameError::user_exited());
                }
                movement => {
                    if let Some(direction) = movement.direction() {
                        *ctx.cursor = ctx.cursor.step(direction);
                        ctx.redraw(&turn_message(&self.name))?;
                    }
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }
}
