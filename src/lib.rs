//! Fox and Hounds rule engine.
//!
//! # Architecture
//!
//! - **Games**: board geometry, move legality, the selection state
//!   machine and win detection for fox and hounds
//! - **Rooms**: a registry of isolated games, each behind its own lock,
//!   with up to two seated players
//! - **Config**: settings for the terminal front end
//!
//! Transport, sessions and rendering are left to the caller. Player
//! identity and side are passed in explicitly on every call.
//!
//! # Example
//!
//! ```
//! use fox_and_hounds::{RoomRegistry, Side};
//!
//! let registry = RoomRegistry::new();
//! let room = registry.create_room();
//! assert_eq!(registry.join_room(&room, "alice".into()).unwrap(), Side::Fox);
//! assert_eq!(registry.join_room(&room, "bob".into()).unwrap(), Side::Hounds);
//!
//! registry.submit_move(&room, Side::Fox, 7, 2).unwrap();
//! let snapshot = registry.submit_move(&room, Side::Fox, 6, 1).unwrap();
//! assert_eq!(snapshot.turn, Side::Hounds);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod games;
mod room;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Errors
pub use error::RoomError;

// Crate-level exports - Rooms
pub use room::{PlayerId, Room, RoomId, RoomRegistry, Roster};

// Crate-level exports - Game types
pub use games::fox_hounds::{
    BOARD_SIZE, DIAGONALS, EndReason, FOX_START, Game, GameSnapshot, GameState, GameStatus,
    HOUND_COUNT, HOUNDS_START, Input, InputError, InputOutcome, LayoutError, Move, Piece,
    PieceKind, Position, RULES, Selection, Side, TurnPhase, in_bounds, is_playable_square, rules,
};
