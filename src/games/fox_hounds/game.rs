//! The selection and move state machine for one game.

use super::action::{Input, InputOutcome, Move};
use super::board::Position;
use super::phases::TurnPhase;
use super::rules;
use super::types::{GameState, GameStatus, Selection};
use tracing::{debug, info, instrument};

/// Fox and hounds game engine.
///
/// Wraps a [`GameState`] and is the only path through which it changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a game in the starting layout.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Creates a game from an existing state.
    ///
    /// A `GameState` can only come from [`GameState::new`] or the checked
    /// [`GameState::from_layout`], so the layout rules already hold.
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the phase of the current turn.
    pub fn phase(&self) -> TurnPhase {
        if self.state.is_terminal() {
            TurnPhase::Finished
        } else if self.state.selection().is_some() {
            TurnPhase::PieceSelected
        } else {
            TurnPhase::Idle
        }
    }

    /// Feeds one input from the side to move into the state machine.
    ///
    /// Whose turn it is has already been checked by the caller; the game
    /// itself only knows which side is to move.
    #[instrument(skip(self), fields(turn = %self.state.turn(), phase = %self.phase()))]
    pub fn handle(&mut self, input: Input) -> InputOutcome {
        match input {
            Input::Reset => {
                self.reset();
                InputOutcome::Reset
            }
            Input::Square(pos) => self.click(pos),
        }
    }

    /// Restores the starting layout, whatever the current phase.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.state = GameState::new();
    }

    /// Puts back any held piece without ending the turn.
    pub fn deselect(&mut self) {
        self.state.clear_selection();
    }

    fn click(&mut self, pos: Position) -> InputOutcome {
        match self.phase() {
            TurnPhase::Finished => match self.state.winner() {
                Some(winner) => InputOutcome::Finished(winner),
                None => InputOutcome::Ignored,
            },
            TurnPhase::Idle => self.select(pos),
            TurnPhase::PieceSelected => match self.state.selection() {
                Some(selection) => self.try_move(selection, pos),
                None => InputOutcome::Ignored,
            },
        }
    }

    fn select(&mut self, pos: Position) -> InputOutcome {
        match self.state.piece_at(pos) {
            Some(piece) if piece.side() == self.state.turn() => {
                let selection = Selection { piece, at: pos };
                debug!(%piece, %pos, "Piece selected");
                self.state.select(selection);
                InputOutcome::Selected(selection)
            }
            _ => {
                debug!(%pos, "Click does not name a piece of the side to move");
                InputOutcome::Ignored
            }
        }
    }

    fn try_move(&mut self, selection: Selection, to: Position) -> InputOutcome {
        let occupied = self.state.occupied();
        let held = self.state.position_of(selection.piece) == Some(selection.at);
        if !held
            || !rules::is_legal_move(selection.piece.kind(), selection.at, to, &occupied)
            || !self.state.apply_move(selection.piece, to)
        {
            debug!(piece = %selection.piece, from = %selection.at, %to, "Illegal target, selection dropped");
            self.state.clear_selection();
            return InputOutcome::Discarded { target: to };
        }

        let mv = Move::new(selection.piece, selection.at, to);
        info!(%mv, next = %self.state.turn(), "Move accepted");
        self.update_status();
        InputOutcome::Moved(mv)
    }

    /// Records a winner if the last move ended the game.
    fn update_status(&mut self) {
        if let Some(reason) = rules::check_winner(&self.state) {
            let winner = reason.winner();
            info!(%winner, %reason, "Game over");
            self.state.set_status(GameStatus::Won { winner, reason });
        }
    }
}
