//! Board geometry for the 8x8 fox and hounds board.
//!
//! Only the dark squares (where `row + col` is odd) are ever occupied.
//! Row 0 is the hounds' home edge and the fox's goal.

use super::action::InputError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// The four diagonal steps as `(row delta, col delta)`.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A board coordinate.
///
/// A `Position` may lie off the board: move generation looks at the
/// neighbours of edge squares, and those are rejected by [`in_bounds`]
/// rather than by construction. Positions coming from outside the engine go
/// through [`Position::try_new`] or [`Position::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row, 0 at the hounds' edge.
    pub row: i8,
    /// Column, 0 at the left.
    pub col: i8,
}

impl Position {
    /// Creates a position without range checks.
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Creates a position from caller-supplied coordinates, rejecting
    /// anything outside the board.
    #[instrument]
    pub fn try_new(row: i64, col: i64) -> Result<Self, InputError> {
        let range = 0..i64::from(BOARD_SIZE);
        if !range.contains(&row) || !range.contains(&col) {
            return Err(InputError::OutOfRange { row, col });
        }
        // Both values are in 0..8 here.
        Ok(Self::new(row as i8, col as i8))
    }

    /// Parses textual coordinates, as received from a form or a terminal.
    #[instrument]
    pub fn parse(row: &str, col: &str) -> Result<Self, InputError> {
        let parse_one = |s: &str| {
            s.trim()
                .parse::<i64>()
                .map_err(|_| InputError::NotANumber(s.to_string()))
        };
        Self::try_new(parse_one(row)?, parse_one(col)?)
    }

    /// Returns the position shifted by the given deltas.
    ///
    /// Saturates at the `i8` limits; a saturated position is off the board.
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self::new(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
    }

    /// The four diagonal neighbours, on or off the board.
    pub fn diagonal_neighbours(self) -> [Position; 4] {
        DIAGONALS.map(|(dr, dc)| self.offset(dr, dc))
    }

    /// True if this position lies on the board.
    pub fn in_bounds(self) -> bool {
        in_bounds(self)
    }

    /// True if this position is a dark square.
    pub fn is_playable(self) -> bool {
        is_playable_square(self)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// True iff both coordinates are in `[0, 8)`.
pub fn in_bounds(pos: Position) -> bool {
    (0..BOARD_SIZE).contains(&pos.row) && (0..BOARD_SIZE).contains(&pos.col)
}

/// True iff `row + col` is odd.
pub fn is_playable_square(pos: Position) -> bool {
    (i16::from(pos.row) + i16::from(pos.col)).rem_euclid(2) == 1
}
