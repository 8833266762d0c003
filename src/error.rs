//! Error types returned by the room registry.

use crate::games::fox_hounds::{InputError, Piece, Position, Side};
use crate::room::RoomId;

/// Why a room operation was rejected.
///
/// None of these are fatal; each leaves the room untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum RoomError {
    /// No room has this identifier.
    #[display("Room {} not found", _0)]
    #[from(ignore)]
    NotFound(RoomId),

    /// Both roles in the room are taken.
    #[display("Room {} is full", _0)]
    #[from(ignore)]
    RoomFull(RoomId),

    /// The caller's side is not the side to move.
    #[display("Not your turn. Waiting for {}", expected)]
    #[from(ignore)]
    NotYourTurn {
        /// The side whose turn it is.
        expected: Side,
    },

    /// A submitted move names a piece that is not on its starting square,
    /// or that the caller's side does not own.
    #[display("No {} of yours at {}", piece, at)]
    #[from(ignore)]
    PieceMismatch {
        /// The piece the move named.
        piece: Piece,
        /// The square the move started from.
        at: Position,
    },

    /// The submitted coordinates could not be used.
    #[display("Invalid input: {}", _0)]
    InvalidInput(InputError),
}

impl std::error::Error for RoomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RoomError::InvalidInput(err) => Some(err),
            _ => None,
        }
    }
}
