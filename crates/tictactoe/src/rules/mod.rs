//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here is stored;
//! callers derive the result from the current board on every read.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{GameResult, LINES, WinLine, derive_result};
