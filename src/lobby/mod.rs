//! Menu and game state machine.

mod controller;
mod menu;

pub use controller::{Flow, GameController, Phase};
pub use menu::MenuState;
