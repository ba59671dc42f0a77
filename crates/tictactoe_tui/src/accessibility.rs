//! Textual descriptions of the board for screen readers and logs.

use tictactoe::{GameState, Position, Square};

/// Help text describing how to play.
pub const BOARD_HELP: &str =
    "Use your pointer or press Enter/Space to place your mark in an empty square.";

/// Label for one square, numbered from 1.
pub fn cell_label(pos: Position, square: Square) -> String {
    let n = pos.to_index() + 1;
    match square {
        Square::Empty => format!("Square {n} is empty"),
        Square::Occupied(mark) => format!("Square {n} contains {mark}"),
    }
}

/// Full description: the status line followed by every square's label.
pub fn describe(game: &GameState) -> Vec<String> {
    std::iter::once(game.status().to_string())
        .chain(
            Position::ALL
                .iter()
                .map(|pos| cell_label(*pos, game.board().get(*pos))),
        )
        .collect()
}
