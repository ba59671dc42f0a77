//! Game state for tic-tac-toe.
//!
//! The state is just the board and whose turn it is. The result, draw and
//! status are derived from the board on every read so they cannot drift.

use crate::invariants::{GameInvariants, InvariantSet};
#[cfg(debug_assertions)]
use crate::invariants::{Invariant, MonotonicBoard};
use crate::rules::{self, GameResult, WinLine};
use crate::{Board, Mark, Position, Square};
use derive_more::Display;
use tracing::{debug, info, instrument};

/// What happened to a move request.
///
/// Rejections are not errors: the state is left untouched and the caller
/// is free to ignore the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveOutcome {
    /// The mark was placed and the turn passed.
    #[display("applied")]
    Applied,
    /// The square already holds a mark.
    #[display("square occupied")]
    Occupied,
    /// A winner already exists.
    #[display("game over")]
    GameOver,
    /// The index is not in 0-8.
    #[display("out of bounds")]
    OutOfBounds,
}

impl MoveOutcome {
    /// Checks if the move changed the state.
    pub fn is_applied(self) -> bool {
        self == MoveOutcome::Applied
    }
}

/// Derived status of a game.
///
/// `Display` renders the status line shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameStatus {
    /// The game continues; `next` moves.
    #[display("Next turn: {next}")]
    InProgress {
        /// Mark to move next.
        next: Mark,
    },
    /// A mark completed a line.
    #[display("Winner: {}", _0.winner())]
    Won(GameResult),
    /// The board is full with no winner.
    #[display("It's a draw")]
    Draw,
}

/// Complete tic-tac-toe state: the board and the mark to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Mark,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, turn: Mark) -> Self {
        Self { board, turn }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Derives the winner and winning line, if any.
    pub fn result(&self) -> Option<GameResult> {
        rules::derive_result(&self.board)
    }

    /// Checks for a full board with no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board, self.result().as_ref())
    }

    /// Checks if the game has ended, by win or draw.
    pub fn is_over(&self) -> bool {
        self.result().is_some() || rules::is_full(&self.board)
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.result().map(|r| r.line())
    }

    /// Derives the current status.
    pub fn status(&self) -> GameStatus {
        match self.result() {
            Some(result) => GameStatus::Won(result),
            None if rules::is_full(&self.board) => GameStatus::Draw,
            None => GameStatus::InProgress { next: self.turn },
        }
    }

    /// Checks if a move at `pos` would be accepted.
    ///
    /// The square must be empty and no winner may exist. Views use this to
    /// disable squares; [`GameState::place`] applies the same rule.
    pub fn is_playable(&self, pos: Position) -> bool {
        self.board.is_empty(pos) && self.result().is_none()
    }

    /// Requests a move at board index `index` (0-8).
    ///
    /// Illegal requests leave the state unchanged.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(pos) => self.place(pos),
            None => {
                debug!(index, "Ignoring move outside the board");
                MoveOutcome::OutOfBounds
            }
        }
    }

    /// Requests a move at `pos` for the mark whose turn it is.
    ///
    /// Illegal requests leave the state unchanged.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place(&mut self, pos: Position) -> MoveOutcome {
        if self.result().is_some() {
            debug!(%pos, "Ignoring move after the game was won");
            return MoveOutcome::GameOver;
        }
        if !self.board.is_empty(pos) {
            debug!(%pos, "Ignoring move onto an occupied square");
            return MoveOutcome::Occupied;
        }

        #[cfg(debug_assertions)]
        let before = self.board.clone();

        self.board.set(pos, Square::Occupied(self.turn));
        self.turn = self.turn.opponent();

        #[cfg(debug_assertions)]
        debug_assert!(MonotonicBoard::holds(&(before, self.board.clone())));
        debug_assert!(GameInvariants::check_all(&*self).is_ok());

        debug!(%pos, status = %self.status(), "Move applied");
        MoveOutcome::Applied
    }

    /// Starts over: empty board, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.turn(), Mark::X);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.status(), GameStatus::InProgress { next: Mark::X });
        assert!(!game.is_over());
    }

    #[test]
    fn test_out_of_bounds_is_noop() {
        let mut game = GameState::new();
        assert_eq!(game.apply_move(9), MoveOutcome::OutOfBounds);
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_place_by_position() {
        let mut game = GameState::new();
        assert!(game.place(Position::Center).is_applied());
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Mark::X));
        assert!(!game.is_playable(Position::Center));
        assert!(game.is_playable(Position::TopLeft));
    }

    #[test]
    fn test_nothing_playable_after_win() {
        let mut game = GameState::new();
        for index in [0, 3, 1, 4, 2] {
            game.apply_move(index);
        }
        assert!(game.is_over());
        assert!(Position::ALL.iter().all(|pos| !game.is_playable(*pos)));
    }

    #[test]
    fn test_status_text() {
        let mut game = GameState::new();
        assert_eq!(game.status().to_string(), "Next turn: X");
        game.apply_move(4);
        assert_eq!(game.status().to_string(), "Next turn: O");
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(MoveOutcome::Occupied.to_string(), "square occupied");
        assert_eq!(MoveOutcome::GameOver.to_string(), "game over");
    }
}
