//! Single-step move legality.

use super::super::board::{Position, in_bounds, is_playable_square};
use super::super::types::PieceKind;
use tracing::instrument;

/// Checks whether `kind` may step from `from` to `to`.
///
/// `occupied` holds every piece's square, including the mover's own.
/// Checks run in order and stop at the first failure:
/// the target is on a dark square of the board, the target is empty,
/// and the step matches the piece's direction rule. Hounds only move
/// away from row 0; the fox moves diagonally either way.
#[instrument(level = "trace")]
pub fn is_legal_move(kind: PieceKind, from: Position, to: Position, occupied: &[Position]) -> bool {
    if !in_bounds(to) || !is_playable_square(to) {
        return false;
    }
    if occupied.contains(&to) {
        return false;
    }
    let d_row = i16::from(to.row) - i16::from(from.row);
    let d_col = i16::from(to.col) - i16::from(from.col);
    match kind {
        PieceKind::Fox => d_row.abs() == 1 && d_col.abs() == 1,
        PieceKind::Hound => d_row == 1 && d_col.abs() == 1,
    }
}

/// All squares `kind` can legally reach from `from`.
pub fn legal_targets(kind: PieceKind, from: Position, occupied: &[Position]) -> Vec<Position> {
    from.diagonal_neighbours()
        .into_iter()
        .filter(|&to| is_legal_move(kind, from, to, occupied))
        .collect()
}

/// True if `kind` has at least one legal step from `from`.
pub fn has_legal_move(kind: PieceKind, from: Position, occupied: &[Position]) -> bool {
    from.diagonal_neighbours()
        .into_iter()
        .any(|to| is_legal_move(kind, from, to, occupied))
}
