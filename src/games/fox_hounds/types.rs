//! Core domain types for fox and hounds.

use super::action::Move;
use super::board::{BOARD_SIZE, Position};
use super::rules;
use serde::{Deserialize, Serialize};

/// Number of hounds on the board.
pub const HOUND_COUNT: usize = 4;

/// Starting square of the fox.
pub const FOX_START: Position = Position::new(7, 2);

/// Starting squares of the hounds, in index order.
pub const HOUNDS_START: [Position; HOUND_COUNT] = [
    Position::new(0, 1),
    Position::new(0, 3),
    Position::new(0, 5),
    Position::new(0, 7),
];

/// One of the two sides of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Controls the fox. Moves first.
    Fox,
    /// Controls the four hounds.
    Hounds,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Fox => Side::Hounds,
            Side::Hounds => Side::Fox,
        }
    }
}

/// Movement class of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum PieceKind {
    /// One diagonal step in any direction.
    Fox,
    /// One diagonal step away from row 0 only.
    Hound,
}

/// A specific piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Piece {
    /// The fox.
    Fox,
    /// A hound, by index into the hound list (0-3). Larger indices name no piece.
    Hound(usize),
}

impl Piece {
    /// Movement class of this piece.
    pub fn kind(self) -> PieceKind {
        match self {
            Piece::Fox => PieceKind::Fox,
            Piece::Hound(_) => PieceKind::Hound,
        }
    }

    /// The side that owns this piece.
    pub fn side(self) -> Side {
        match self {
            Piece::Fox => Side::Fox,
            Piece::Hound(_) => Side::Hounds,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::Fox => write!(f, "fox"),
            Piece::Hound(index) => write!(f, "hound {}", index),
        }
    }
}

/// The piece currently picked up by the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// Which piece.
    pub piece: Piece,
    /// Where it stood when selected.
    pub at: Position,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// The fox reached row 0.
    #[strum(to_string = "the fox reached the far edge")]
    FoxEscaped,
    /// The fox had no move on its turn.
    #[strum(to_string = "the fox is trapped")]
    FoxTrapped,
    /// No hound could move.
    #[strum(to_string = "every hound is stuck")]
    HoundsTrapped,
}

impl EndReason {
    /// The side that wins when the game ends this way.
    pub fn winner(self) -> Side {
        match self {
            EndReason::FoxEscaped | EndReason::HoundsTrapped => Side::Fox,
            EndReason::FoxTrapped => Side::Hounds,
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won {
        /// The winning side.
        winner: Side,
        /// What ended the game.
        reason: EndReason,
    },
}

/// Rejected custom layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum LayoutError {
    /// A piece lies outside the board.
    #[display("Piece at {} is off the board", _0)]
    OffBoard(Position),
    /// A piece lies on a light square.
    #[display("Piece at {} is on an unplayable square", _0)]
    Unplayable(Position),
    /// Two pieces share a square.
    #[display("More than one piece at {}", _0)]
    Overlap(Position),
}

impl std::error::Error for LayoutError {}

/// Complete state of one game.
///
/// Only built through [`GameState::new`] or [`GameState::from_layout`], so
/// every value upholds the layout rules. Use [`super::GameSnapshot`] to
/// send a game over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    fox: Position,
    hounds: [Position; HOUND_COUNT],
    selection: Option<Selection>,
    turn: Side,
    status: GameStatus,
}

impl GameState {
    /// Creates a game in the starting layout, fox to move.
    pub fn new() -> Self {
        Self {
            fox: FOX_START,
            hounds: HOUNDS_START,
            selection: None,
            turn: Side::Fox,
            status: GameStatus::InProgress,
        }
    }

    /// Creates an in-progress game from an arbitrary legal layout.
    ///
    /// Every piece must be on a distinct playable square. No win check is
    /// run; the layout is treated as if the previous move just produced it.
    pub fn from_layout(
        fox: Position,
        hounds: [Position; HOUND_COUNT],
        turn: Side,
    ) -> Result<Self, LayoutError> {
        let mut seen = Vec::with_capacity(HOUND_COUNT + 1);
        for pos in std::iter::once(fox).chain(hounds) {
            if !pos.in_bounds() {
                return Err(LayoutError::OffBoard(pos));
            }
            if !pos.is_playable() {
                return Err(LayoutError::Unplayable(pos));
            }
            if seen.contains(&pos) {
                return Err(LayoutError::Overlap(pos));
            }
            seen.push(pos);
        }
        Ok(Self {
            fox,
            hounds,
            selection: None,
            turn,
            status: GameStatus::InProgress,
        })
    }

    /// Position of the fox.
    pub fn fox(&self) -> Position {
        self.fox
    }

    /// Positions of the hounds, in stable index order.
    pub fn hounds(&self) -> &[Position; HOUND_COUNT] {
        &self.hounds
    }

    /// The side to move.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// The currently selected piece, if any.
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// The game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once a winner has been recorded.
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, GameStatus::Won { .. })
    }

    /// The winner, if the game is over.
    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won { winner, .. } => Some(winner),
        }
    }

    /// All five occupied squares, fox first.
    pub fn occupied(&self) -> [Position; HOUND_COUNT + 1] {
        let [a, b, c, d] = self.hounds;
        [self.fox, a, b, c, d]
    }

    /// The piece standing on `pos`, if any.
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        if self.fox == pos {
            return Some(Piece::Fox);
        }
        self.hounds.iter().position(|&h| h == pos).map(Piece::Hound)
    }

    /// Current square of `piece`, or `None` for a hound index past the last hound.
    pub fn position_of(&self, piece: Piece) -> Option<Position> {
        match piece {
            Piece::Fox => Some(self.fox),
            Piece::Hound(index) => self.hounds.get(index).copied(),
        }
    }

    /// Every legal move for the side to move. Empty once the game is over.
    ///
    /// This is the hook an automated player uses to choose its move.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        let occupied = self.occupied();
        let pieces: Vec<Piece> = match self.turn {
            Side::Fox => vec![Piece::Fox],
            Side::Hounds => (0..HOUND_COUNT).map(Piece::Hound).collect(),
        };
        pieces
            .into_iter()
            .filter_map(|piece| self.position_of(piece).map(|from| (piece, from)))
            .flat_map(|(piece, from)| {
                rules::legal_targets(piece.kind(), from, &occupied)
                    .into_iter()
                    .map(move |to| Move::new(piece, from, to))
            })
            .collect()
    }

    pub(super) fn select(&mut self, selection: Selection) {
        self.selection = Some(selection);
    }

    pub(super) fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Moves a piece and passes the turn (unchecked - use `Game` for validation).
    ///
    /// Returns false, changing nothing, if `piece` names no hound.
    pub(super) fn apply_move(&mut self, piece: Piece, to: Position) -> bool {
        let slot = match piece {
            Piece::Fox => &mut self.fox,
            Piece::Hound(index) => match self.hounds.get_mut(index) {
                Some(slot) => slot,
                None => return false,
            },
        };
        *slot = to;
        self.selection = None;
        self.turn = self.turn.opponent();
        true
    }

    pub(super) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameState {
    /// Renders the board with `F` for the fox, `H` for hounds and `.` for
    /// empty dark squares. Row 0 is printed first.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render('F', 'H'))
    }
}

impl GameState {
    /// Renders the board with custom glyphs for the pieces.
    pub fn render(&self, fox_glyph: char, hound_glyph: char) -> String {
        let mut out = String::from("  ");
        for col in 0..BOARD_SIZE {
            out.push_str(&format!(" {}", col));
        }
        out.push('\n');
        for row in 0..BOARD_SIZE {
            out.push_str(&format!("{} ", row));
            for col in 0..BOARD_SIZE {
                let pos = Position::new(row, col);
                let glyph = match self.piece_at(pos) {
                    Some(Piece::Fox) => fox_glyph,
                    Some(Piece::Hound(_)) => hound_glyph,
                    None if pos.is_playable() => '.',
                    None => ' ',
                };
                out.push(' ');
                out.push(glyph);
            }
            if row < BOARD_SIZE - 1 {
                out.push('\n');
            }
        }
        out
    }
}
