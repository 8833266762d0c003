mod action;
mod board;
mod game;
mod phases;
mod snapshot;
mod types;

pub mod rules;

pub use action::{Input, InputError, InputOutcome, Move};
pub use board::{BOARD_SIZE, DIAGONALS, Position, in_bounds, is_playable_square};
pub use game::Game;
pub use phases::TurnPhase;
pub use snapshot::GameSnapshot;
pub use types::{
    EndReason, FOX_START, GameState, GameStatus, HOUND_COUNT, HOUNDS_START, LayoutError, Piece,
    PieceKind, Selection, Side,
};

/// Rules text shown to players.
pub const RULES: &str = "\
Fox and Hounds is played on the dark squares of an 8x8 board.

The fox starts on the bottom row and moves first. It steps one square
diagonally in any direction. The four hounds start on the top row and
step one square diagonally, only downwards. Pieces never jump or capture.

To move, pick up one of your pieces by choosing its square, then choose
an empty dark square one diagonal step away. An illegal destination
drops the piece and you choose again.

The fox wins by reaching the top row, or when no hound can move.
The hounds win by leaving the fox without a move on its turn.";
