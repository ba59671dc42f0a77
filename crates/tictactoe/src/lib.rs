//! Pure tic-tac-toe game logic.
//!
//! The crate owns the game state (board and turn) and derives everything
//! else from it: the winning line, draws, and the status text shown to
//! players.
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameState, Mark};
//!
//! let mut game = GameState::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index);
//! }
//!
//! let result = game.result().expect("X completes the top row");
//! assert_eq!(result.winner(), Mark::X);
//! assert_eq!(result.line().indices(), [0, 1, 2]);
//! assert_eq!(game.status().to_string(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod invariants;
mod position;
mod rules;
mod types;

pub use game::{GameState, GameStatus, MoveOutcome};
pub use invariants::{
    AlternatingTurn, GameInvariants, Invariant, InvariantSet, InvariantViolation, MonotonicBoard,
    SingleOutcome,
};
pub use position::Position;
pub use rules::{GameResult, LINES, WinLine, derive_result, is_draw, is_full};
pub use types::{Board, Mark, Square};
