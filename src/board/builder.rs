//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece, on boards of any size.
//!
//! # Example
//! ```
//! use chess_ai::board::{BoardBuilder, Coord, PieceType, Team};
//!
//! let board = BoardBuilder::new()
//!     .size(6)
//!     .piece(Coord::new(0, 0), Team::White, PieceType::Rook)
//!     .piece(Coord::new(5, 5), Team::Black, PieceType::King)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.piece_count(), 2);
//! ```

use super::error::BoardError;
use super::state::DEFAULT_BOARD_SIZE;
use super::{Board, Coord, PieceType, Team};

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// The standard 8×8 opening layout as `(tile, team, kind)` triples.
pub(crate) fn standard_layout() -> Vec<(Coord, Team, PieceType)> {
    let mut layout = Vec::with_capacity(32);
    for (x, &kind) in BACK_RANK.iter().enumerate() {
        layout.push((Coord::new(x, 0), Team::White, kind));
        layout.push((Coord::new(x, 1), Team::White, PieceType::Pawn));
        layout.push((Coord::new(x, 6), Team::Black, PieceType::Pawn));
        layout.push((Coord::new(x, 7), Team::Black, kind));
    }
    layout
}

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    size: usize,
    pieces: Vec<(Coord, Team, PieceType, bool)>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty 8×8 board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            size: DEFAULT_BOARD_SIZE,
            pieces: Vec::new(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (at, team, kind) in standard_layout() {
            builder.pieces.push((at, team, kind, false));
        }
        builder
    }

    /// Set the board edge length.
    #[must_use]
    pub const fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, at: Coord, team: Team, kind: PieceType) -> Self {
        self.pieces.retain(|(sq, ..)| *sq != at);
        self.pieces.push((at, team, kind, false));
        self
    }

    /// Place a piece that has already moved (pawns lose their double step).
    #[must_use]
    pub fn moved_piece(mut self, at: Coord, team: Team, kind: PieceType) -> Self {
        self.pieces.retain(|(sq, ..)| *sq != at);
        self.pieces.push((at, team, kind, true));
        self
    }

    /// Remove a piece from a tile.
    #[must_use]
    pub fn clear(mut self, at: Coord) -> Self {
        self.pieces.retain(|(sq, ..)| *sq != at);
        self
    }

    /// Build the board, failing on a zero size or off-board pieces.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut board = Board::empty(self.size)?;
        for (at, team, kind, has_moved) in self.pieces {
            board.place(at, kind, team)?;
            if has_moved {
                board.piece_mut(at)?.has_moved = true;
            }
        }
        Ok(board)
    }
}
