//! Externally visible projection of a game.

use super::board::Position;
use super::types::{EndReason, GameState, GameStatus, HOUND_COUNT, Selection, Side};
use serde::{Deserialize, Serialize};

/// Read-only view of one game, safe to hand to a transport layer.
///
/// Carries no player identities; those belong to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Fox position.
    pub fox: Position,
    /// Hound positions, in stable index order.
    pub hounds: [Position; HOUND_COUNT],
    /// Side to move.
    pub turn: Side,
    /// Piece currently picked up, if any.
    pub selection: Option<Selection>,
    /// True once the game is over.
    pub terminal: bool,
    /// Winning side, if the game is over.
    pub winner: Option<Side>,
    /// What ended the game, if it is over.
    pub end_reason: Option<EndReason>,
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        let end_reason = match state.status() {
            GameStatus::InProgress => None,
            GameStatus::Won { reason, .. } => Some(reason),
        };
        Self {
            fox: state.fox(),
            hounds: *state.hounds(),
            turn: state.turn(),
            selection: state.selection(),
            terminal: state.is_terminal(),
            winner: state.winner(),
            end_reason,
        }
    }
}
