//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that hold for every reachable game
//! state. [`GameState`] checks them in debug builds after each accepted
//! move; they are also testable on their own.

use crate::rules::LINES;
use crate::{Board, GameState, Mark, Square};
use derive_more::{Display, Error};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

/// Invariant: turns alternate starting with X.
///
/// With X first and strict alternation, X has as many marks as O when X is
/// to move, and exactly one more when O is to move.
pub struct AlternatingTurn;

impl Invariant<GameState> for AlternatingTurn {
    fn holds(game: &GameState) -> bool {
        let xs = game.board().count(Mark::X);
        let os = game.board().count(Mark::O);
        match game.turn() {
            Mark::X => xs == os,
            Mark::O => xs == os + 1,
        }
    }

    fn description() -> &'static str {
        "Turns alternate starting with X"
    }
}

/// Invariant: at most one mark has completed a line.
///
/// Play stops at the first win, so both marks can never own a line.
pub struct SingleOutcome;

impl Invariant<GameState> for SingleOutcome {
    fn holds(game: &GameState) -> bool {
        let completes = |mark: Mark| {
            LINES.iter().any(|line| {
                line.positions()
                    .iter()
                    .all(|pos| game.board().get(*pos) == Square::Occupied(mark))
            })
        };
        !(completes(Mark::X) && completes(Mark::O))
    }

    fn description() -> &'static str {
        "At most one mark completes a line"
    }
}

/// Invariant: squares never change once set.
///
/// Checked over a `(before, after)` pair of boards.
pub struct MonotonicBoard;

impl Invariant<(Board, Board)> for MonotonicBoard {
    fn holds((before, after): &(Board, Board)) -> bool {
        before
            .squares()
            .iter()
            .zip(after.squares())
            .all(|(old, new)| old.is_empty() || old == new)
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

/// Invariants every [`GameState`] satisfies.
pub type GameInvariants = (AlternatingTurn, SingleOutcome);
