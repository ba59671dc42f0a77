//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use tracing::instrument;

/// Three positions that win when they hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// Positions on this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices on this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Checks if `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [WinLine; 8] = {
    use Position::*;
    [
        // Rows
        WinLine([TopLeft, TopCenter, TopRight]),
        WinLine([MiddleLeft, Center, MiddleRight]),
        WinLine([BottomLeft, BottomCenter, BottomRight]),
        // Columns
        WinLine([TopLeft, MiddleLeft, BottomLeft]),
        WinLine([TopCenter, Center, BottomCenter]),
        WinLine([TopRight, MiddleRight, BottomRight]),
        // Diagonals
        WinLine([TopLeft, Center, BottomRight]),
        WinLine([TopRight, Center, BottomLeft]),
    ]
};

/// A decided game: who won and along which line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameResult {
    winner: Mark,
    line: WinLine,
}

impl GameResult {
    /// The winning mark.
    pub fn winner(&self) -> Mark {
        self.winner
    }

    /// The line the winner completed.
    pub fn line(&self) -> WinLine {
        self.line
    }
}

/// Derives the result of `board`.
///
/// Returns the first line in [`LINES`] order whose three squares hold the
/// same mark, or `None` if no line is complete.
#[instrument(skip(board))]
pub fn derive_result(board: &Board) -> Option<GameResult> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(mark)
                if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
            {
                Some(GameResult {
                    winner: mark,
                    line: *line,
                })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(mark: Mark, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.set(*pos, Square::Occupied(mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(derive_result(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(
            Mark::X,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        let result = derive_result(&board).unwrap();
        assert_eq!(result.winner(), Mark::X);
        assert_eq!(result.line().indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(
            Mark::O,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        let result = derive_result(&board).unwrap();
        assert_eq!(result.winner(), Mark::O);
        assert_eq!(result.line().indices(), [2, 4, 6]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Mark::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(derive_result(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Mark::X, &[Position::TopLeft, Position::TopCenter]);
        board.set(Position::TopRight, Square::Occupied(Mark::O));
        assert_eq!(derive_result(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Top row and left column both complete; the row comes first.
        let board = board_with(
            Mark::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        assert_eq!(derive_result(&board).unwrap().line(), LINES[0]);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let board = board_with(Mark::O, &line.positions());
            let result = derive_result(&board).unwrap();
            assert_eq!(result.line(), line);
            assert_eq!(result.winner(), Mark::O);
        }
    }

    #[test]
    fn test_line_contains() {
        assert!(LINES[6].contains(Position::Center));
        assert!(!LINES[6].contains(Position::TopRight));
    }
}
