//! Inputs, moves and their outcomes.
//!
//! A raw board click becomes either a selection or a move attempt
//! depending on the turn phase; see [`super::Game::handle`].

use super::board::Position;
use super::types::{Piece, Selection, Side};
use serde::{Deserialize, Serialize};

/// A single input from the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Input {
    /// A click on a board square.
    Square(Position),
    /// Restore the starting layout.
    Reset,
}

/// A piece moving from one square to another.
///
/// Used both to report accepted moves and, through
/// [`super::GameState::legal_moves`], to offer moves to an automated player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The piece moving.
    pub piece: Piece,
    /// Its square before the move.
    pub from: Position,
    /// Its square after the move.
    pub to: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.piece, self.from, self.to)
    }
}

/// What an input did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputOutcome {
    /// A piece of the side to move was picked up.
    Selected(Selection),
    /// The selected piece moved and the turn passed.
    Moved(Move),
    /// The target was illegal; the selection was dropped.
    Discarded {
        /// The rejected target.
        target: Position,
    },
    /// The click did not name a piece of the side to move.
    Ignored,
    /// The game is over; nothing changed.
    Finished(Side),
    /// The board was restored to the starting layout.
    Reset,
}

/// Coordinates that could not be turned into a board position.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// A coordinate was not an integer.
    #[display("Not a number: {:?}", _0)]
    NotANumber(String),
    /// A coordinate was outside the board.
    #[display("Coordinates ({}, {}) are off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },
}

impl std::error::Error for InputError {}
