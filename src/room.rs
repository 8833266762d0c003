//! Game rooms and the registry that isolates them.
//!
//! Each room owns one [`Game`] behind its own lock. The registry map is
//! only locked long enough to find or insert a room, so unrelated games
//! never wait on each other and no lock is held across two rooms.

use crate::error::RoomError;
use crate::games::fox_hounds::{Game, GameSnapshot, Input, InputOutcome, Move, Position, Side};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use tracing::{debug, info, instrument, warn};

/// Opaque unique identifier of a room.
pub type RoomId = String;

/// Opaque identity of a player, supplied by the session layer.
pub type PlayerId = String;

/// Which player holds which side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Roster {
    /// Holder of the fox side.
    fox: Option<PlayerId>,
    /// Holder of the hounds side.
    hounds: Option<PlayerId>,
}

impl Roster {
    /// Number of sides taken.
    pub fn len(&self) -> usize {
        usize::from(self.fox.is_some()) + usize::from(self.hounds.is_some())
    }

    /// True if nobody has joined.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The player holding `side`, if any.
    pub fn holder(&self, side: Side) -> Option<&PlayerId> {
        match side {
            Side::Fox => self.fox.as_ref(),
            Side::Hounds => self.hounds.as_ref(),
        }
    }

    /// Gives the first free side to `player`: fox first, then hounds.
    fn assign(&mut self, player: PlayerId) -> Option<Side> {
        if self.fox.is_none() {
            self.fox = Some(player);
            Some(Side::Fox)
        } else if self.hounds.is_none() {
            self.hounds = Some(player);
            Some(Side::Hounds)
        } else {
            None
        }
    }
}

/// One isolated game with up to two players.
#[derive(Debug, Clone, Getters)]
pub struct Room {
    /// Room identifier.
    id: RoomId,
    /// The game being played.
    game: Game,
    /// Players and their sides.
    roster: Roster,
}

impl Room {
    /// Creates a room with a fresh game and nobody in it.
    #[instrument]
    pub(crate) fn new(id: RoomId) -> Self {
        info!(room_id = %id, "Creating new room");
        Self {
            id,
            game: Game::new(),
            roster: Roster::default(),
        }
    }

    /// Adds a player, assigning fox to the first joiner and hounds to the second.
    #[instrument(skip(self), fields(room_id = %self.id))]
    pub(crate) fn join(&mut self, player: PlayerId) -> Result<Side, RoomError> {
        match self.roster.assign(player.clone()) {
            Some(side) => {
                info!(player_id = %player, %side, "Player joined");
                Ok(side)
            }
            None => {
                warn!(player_id = %player, "Room already has 2 players");
                Err(RoomError::RoomFull(self.id.clone()))
            }
        }
    }

    /// The sides held by `player`. Both, for a one-device room.
    pub fn role_of(&self, player: &str) -> Vec<Side> {
        [Side::Fox, Side::Hounds]
            .into_iter()
            .filter(|&side| self.roster.holder(side).map(String::as_str) == Some(player))
            .collect()
    }

    /// Current view of the game.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self.game.state())
    }

    /// Feeds one input from `side` into the game.
    ///
    /// Clicks from the side not on move are rejected without touching the
    /// game. Once the game is over, clicks from either side are no-ops.
    /// Reset is open to both sides.
    #[instrument(skip(self), fields(room_id = %self.id))]
    pub(crate) fn submit(&mut self, side: Side, input: Input) -> Result<InputOutcome, RoomError> {
        if let Input::Square(_) = input {
            self.check_turn(side)?;
        }
        Ok(self.game.handle(input))
    }

    fn check_turn(&self, side: Side) -> Result<(), RoomError> {
        let state = self.game.state();
        if !state.is_terminal() && state.turn() != side {
            warn!(%side, expected = %state.turn(), "Player tried to move out of turn");
            return Err(RoomError::NotYourTurn {
                expected: state.turn(),
            });
        }
        Ok(())
    }

    /// Plays a whole move for `side`: picks up `mv.piece` from `mv.from` and
    /// drops it on `mv.to`.
    ///
    /// The entry point for automated players. A move whose piece is not on
    /// `mv.from`, or does not belong to `side`, is rejected. Any piece already
    /// held is put back first. An illegal target leaves the board unchanged,
    /// exactly like two human clicks would.
    #[instrument(skip(self, mv), fields(room_id = %self.id, %mv))]
    pub(crate) fn play(&mut self, side: Side, mv: Move) -> Result<InputOutcome, RoomError> {
        self.check_turn(side)?;
        let state = self.game.state();
        if !state.is_terminal()
            && (mv.piece.side() != side || state.piece_at(mv.from) != Some(mv.piece))
        {
            warn!(%side, %mv, "Move names a piece that is not on its square");
            return Err(RoomError::PieceMismatch {
                piece: mv.piece,
                at: mv.from,
            });
        }
        if self.game.state().selection().map(|s| s.at) != Some(mv.from) {
            self.game.deselect();
            match self.submit(side, Input::Square(mv.from))? {
                InputOutcome::Selected(_) => {}
                other => return Ok(other),
            }
        }
        self.submit(side, Input::Square(mv.to))
    }
}

/// Manages all rooms.
///
/// Cloning is cheap and clones share the same rooms.
#[derive(Debug, Clone, Default)]
pub struct RoomRegistry {
    rooms: Arc<RwLock<HashMap<RoomId, Arc<Mutex<Room>>>>>,
}

impl RoomRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating room registry");
        Self::default()
    }

    /// Creates a room with a fresh identifier and an empty roster.
    #[instrument(skip(self))]
    pub fn create_room(&self) -> RoomId {
        let id = uuid::Uuid::new_v4().to_string();
        let room = Room::new(id.clone());
        self.rooms
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone(), Arc::new(Mutex::new(room)));
        id
    }

    /// Creates a room where `player` holds both sides, for play on one device.
    #[instrument(skip(self))]
    pub fn create_local_room(&self, player: PlayerId) -> RoomId {
        let id = uuid::Uuid::new_v4().to_string();
        let mut room = Room::new(id.clone());
        room.roster.fox = Some(player.clone());
        room.roster.hounds = Some(player);
        info!(room_id = %id, "Created local room");
        self.rooms
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone(), Arc::new(Mutex::new(room)));
        id
    }

    /// Adds `player` to a room and returns the side they were given.
    #[instrument(skip(self))]
    pub fn join_room(&self, id: &str, player: PlayerId) -> Result<Side, RoomError> {
        let room = self.room(id)?;
        let side = lock(&room).join(player)?;
        Ok(side)
    }

    /// Returns a copy of the room.
    #[instrument(skip(self))]
    pub fn get_room(&self, id: &str) -> Result<Room, RoomError> {
        let room = self.room(id)?;
        let copy = lock(&room).clone();
        Ok(copy)
    }

    /// Current view of a room's game.
    #[instrument(skip(self))]
    pub fn snapshot(&self, id: &str) -> Result<GameSnapshot, RoomError> {
        let room = self.room(id)?;
        let snapshot = lock(&room).snapshot();
        Ok(snapshot)
    }

    /// Applies one input for `side` and returns the resulting view.
    ///
    /// The turn check and the move run under the room's lock, so two
    /// racing submissions serialize and the second sees the first's result.
    #[instrument(skip(self))]
    pub fn submit_input(
        &self,
        id: &str,
        side: Side,
        input: Input,
    ) -> Result<GameSnapshot, RoomError> {
        let room = self.room(id)?;
        let mut room = lock(&room);
        let outcome = room.submit(side, input)?;
        debug!(?outcome, "Input handled");
        Ok(room.snapshot())
    }

    /// Applies a click on (`row`, `col`) for `side`.
    ///
    /// Coordinates outside the board are rejected before the room is touched.
    #[instrument(skip(self))]
    pub fn submit_move(
        &self,
        id: &str,
        side: Side,
        row: i64,
        col: i64,
    ) -> Result<GameSnapshot, RoomError> {
        let pos = Position::try_new(row, col).inspect_err(|err| {
            warn!(%err, "Rejected malformed coordinates");
        })?;
        self.submit_input(id, side, Input::Square(pos))
    }

    /// Plays a whole move for `side` in one step.
    #[instrument(skip(self))]
    pub fn play_move(&self, id: &str, side: Side, mv: Move) -> Result<GameSnapshot, RoomError> {
        let room = self.room(id)?;
        let mut room = lock(&room);
        let outcome = room.play(side, mv)?;
        debug!(?outcome, "Move handled");
        Ok(room.snapshot())
    }

    /// Restores a room's game to the starting layout. Players stay seated.
    #[instrument(skip(self))]
    pub fn reset_room(&self, id: &str) -> Result<GameSnapshot, RoomError> {
        let room = self.room(id)?;
        let mut room = lock(&room);
        room.game.reset();
        Ok(room.snapshot())
    }

    /// Lists all room identifiers.
    #[instrument(skip(self))]
    pub fn list_rooms(&self) -> Vec<RoomId> {
        let rooms = self.rooms.read().unwrap_or_else(PoisonError::into_inner);
        let ids: Vec<_> = rooms.keys().cloned().collect();
        debug!(count = ids.len(), "Listed rooms");
        ids
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// True if no room exists.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks a room up, releasing the registry lock before returning.
    fn room(&self, id: &str) -> Result<Arc<Mutex<Room>>, RoomError> {
        let rooms = self.rooms.read().unwrap_or_else(PoisonError::into_inner);
        rooms.get(id).cloned().ok_or_else(|| {
            warn!(room_id = id, "Room not found");
            RoomError::NotFound(id.to_string())
        })
    }
}

/// Locks a room. Every mutation is validated before it is written, so a
/// room is consistent even if another holder panicked.
fn lock(room: &Mutex<Room>) -> MutexGuard<'_, Room> {
    room.lock().unwrap_or_else(PoisonError::into_inner)
}
