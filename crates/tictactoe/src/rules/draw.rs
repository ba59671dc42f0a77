//! Draw detection logic for tic-tac-toe.

use super::win::GameResult;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| !s.is_empty())
}

/// A draw is a full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, result: Option<&GameResult>) -> bool {
    result.is_none() && is_full(board)
}
