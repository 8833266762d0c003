//! End-of-game detection for fox and hounds.

use super::super::types::{EndReason, GameState, PieceKind, Side};
use super::moves::has_legal_move;
use tracing::instrument;

/// The fox stands on row 0.
pub fn fox_escaped(state: &GameState) -> bool {
    state.fox().row == 0
}

/// It is the fox's turn and the fox cannot move.
pub fn fox_trapped(state: &GameState) -> bool {
    state.turn() == Side::Fox && !has_legal_move(PieceKind::Fox, state.fox(), &state.occupied())
}

/// No hound has a legal step, whichever side is to move.
pub fn hounds_trapped(state: &GameState) -> bool {
    let occupied = state.occupied();
    state
        .hounds()
        .iter()
        .all(|&hound| !has_legal_move(PieceKind::Hound, hound, &occupied))
}

/// Checks whether the position just produced by a move ends the game.
///
/// Conditions are tried in a fixed order and the first that holds is
/// reported: fox escape, then fox trapped, then hounds trapped.
#[instrument(skip(state), fields(fox = %state.fox(), turn = %state.turn()))]
pub fn check_winner(state: &GameState) -> Option<EndReason> {
    if fox_escaped(state) {
        Some(EndReason::FoxEscaped)
    } else if fox_trapped(state) {
        Some(EndReason::FoxTrapped)
    } else if hounds_trapped(state) {
        Some(EndReason::HoundsTrapped)
    } else {
        None
    }
}
