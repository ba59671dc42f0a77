//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use tictactoe::Position;
use tracing::instrument;

/// A user intent decoded from a key press or mouse click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place a mark on a specific square (digit key or click).
    Select(Position),
    /// Place a mark on the square under the cursor.
    SelectCursor,
    /// Move the cursor with an arrow key.
    MoveCursor(KeyCode),
    /// Start a new game.
    Reset,
    /// Leave the application.
    Quit,
}

/// Maps a key press to an action.
///
/// Digits 1-9 address squares in reading order.
#[instrument]
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(key))
        }
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Position::from_index)
            .map(Action::Select),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
