//! Computer player wrapping a strategy.

use super::{MoveContext, Player};
use crate::ai::Strategy;
use crate::error::GameError;
use crate::games::tictactoe::Position;
use crate::interface::{InputEvent, InputSource};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Plays moves chosen by a [`Strategy`], after a short pause so a person
/// watching can follow the game.
pub struct ComputerPlayer {
    strategy: Box<dyn Strategy>,
    delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player that waits `delay` before each move.
    pub fn new(strategy: impl Strategy + 'static, delay: Duration) -> Self {
        Self {
            strategy: Box::new(strategy),
            delay,
        }
    }

    /// Returns the pause before each move.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Sleeps for `delay` unless the user cancels first.
///
/// Events other than Cancel are dropped.
async fn pause_or_cancel(input: &mut dyn InputSource, delay: Duration) -> Result<(), GameError> {
    let sleep = tokio::time::sleep(delay);
    tokio::pin!(sleep);

    loop {
        tokio::select! {
            _ = &mut sleep => return Ok(()),
            event = input.next_event() => match event? {
                InputEvent::Cancel => {
                    info!("Game cancelled while the computer was thinking");
                    return Err(GameError::user_exited());
                }
                other => debug!(event = ?other, "Ignoring input during computer turn"),
            },
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    #[instrument(skip(self, ctx), fields(ai = %self.strategy.name(), mark = %ctx.mark))]
    async fn get_move(&mut self, ctx: &mut MoveContext<'_>) -> Result<Position, GameError> {
        if !self.delay.is_zero() {
            pause_or_cancel(&mut *ctx.input, self.delay).await?;
        }

        let position = self.strategy.get_move(&ctx.board, ctx.mark)?;
        debug!(position = %position, "AI chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        self.strategy.name()
    }

    fn is_human(&self) -> bool {
        false
    }
}
