//! Application state and logic.

use crate::accessibility;
use crate::input::{self, Action};
use tictactoe::{GameState, MoveOutcome, Position};
use tracing::{debug, info, instrument};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep handling events.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state: the game plus the keyboard cursor.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
}

impl App {
    /// Creates a new application with a fresh game and the cursor centered.
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Status text for the status region.
    pub fn status_text(&self) -> String {
        self.game.status().to_string()
    }

    /// Label of the square under the cursor.
    pub fn cursor_label(&self) -> String {
        accessibility::cell_label(self.cursor, self.game.board().get(self.cursor))
    }

    /// Applies a decoded user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) -> Flow {
        match action {
            Action::Select(pos) => {
                self.cursor = pos;
                self.select(pos);
            }
            Action::SelectCursor => {
                self.select(self.cursor);
            }
            Action::MoveCursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Action::Reset => self.reset(),
            Action::Quit => {
                info!("User quit");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    /// Forwards a selection to the game if the square is playable.
    ///
    /// Disabled squares never reach the game; returns `None` for them.
    pub fn select(&mut self, pos: Position) -> Option<MoveOutcome> {
        if !self.game.is_playable(pos) {
            debug!(%pos, "Square is disabled, not dispatching");
            return None;
        }
        let outcome = self.game.place(pos);
        debug!(%pos, %outcome, board = ?accessibility::describe(&self.game), "Dispatched move");
        Some(outcome)
    }

    /// Restarts the game.
    pub fn reset(&mut self) {
        debug!("Restarting game");
        self.game.reset();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
