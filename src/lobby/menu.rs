//! Mode selection menu.

use crate::interface::{MenuView, View};
use crate::session::GameMode;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Highlighted entry of the mode menu.
///
/// The selection survives returning from a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    selected: usize,
}

impl MenuState {
    /// Creates a menu with the first mode highlighted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves selection up, wrapping to the bottom.
    #[instrument(skip(self))]
    pub fn select_previous(&mut self) {
        let count = GameMode::iter().count();
        self.selected = (self.selected + count - 1) % count;
    }

    /// Moves selection down, wrapping to the top.
    #[instrument(skip(self))]
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % GameMode::iter().count();
    }

    /// Index of the highlighted mode.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The highlighted mode.
    pub fn selected_mode(&self) -> GameMode {
        GameMode::iter().nth(self.selected).unwrap_or_default()
    }

    /// Menu view for the screen.
    pub fn view(&self) -> View<'static> {
        View::Menu(MenuView {
            options: &GameMode::ALL,
            selected: self.selected,
        })
    }
}
