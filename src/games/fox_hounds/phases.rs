//! Turn phases of the selection state machine.

use serde::{Deserialize, Serialize};

/// Where the side to move is within its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum TurnPhase {
    /// Nothing selected; the next click picks a piece.
    Idle,
    /// A piece is held; the next click is its destination.
    PieceSelected,
    /// The game is over; clicks are ignored until reset.
    Finished,
}
