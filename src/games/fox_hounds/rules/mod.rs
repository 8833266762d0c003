//! Game rules for fox and hounds.
//!
//! Pure functions over positions and game state. Move legality lives in
//! [`moves`], end-of-game detection in [`win`].

pub mod moves;
pub mod win;

pub use moves::{has_legal_move, is_legal_move, legal_targets};
pub use win::{check_winner, fox_escaped, fox_trapped, hounds_trapped};
