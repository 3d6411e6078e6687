//! Piece, piece type and team types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// Kinds of pieces that can occupy a tile.
///
/// `None` is a placeholder kind: it carries no material weight and is never
/// listed among a side's pieces.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    None,
}

impl PieceType {
    /// All real piece types in index order
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Table index, `None` for the placeholder kind.
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> Option<usize> {
        match self {
            PieceType::Pawn => Some(0),
            PieceType::Knight => Some(1),
            PieceType::Bishop => Some(2),
            PieceType::Rook => Some(3),
            PieceType::Queen => Some(4),
            PieceType::King => Some(5),
            PieceType::None => None,
        }
    }

    /// Parse a piece type from a character (p, n, b, r, q, k), case-insensitive
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
            PieceType::None => '?',
        }
    }

    /// Character with case based on team (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_team_char(self, team: Team) -> char {
        let c = self.to_char();
        if team == Team::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }
}

/// The two sides of the game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Team {
    White,
    Black,
}

impl Team {
    pub const BOTH: [Team; 2] = [Team::White, Team::Black];

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Pawn forward direction along y (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn forward(self) -> i32 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => write!(f, "White"),
            Team::Black => write!(f, "Black"),
        }
    }
}

/// Stable identity of a piece for the lifetime of a board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceId(pub u32);

/// A piece on the board.
///
/// `position` and `has_moved` are only updated when a move is committed;
/// speculative moves made during search leave them alone.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceType,
    pub team: Team,
    pub has_moved: bool,
    pub position: Coord,
}

impl Piece {
    #[must_use]
    pub const fn new(id: PieceId, kind: PieceType, team: Team, position: Coord) -> Self {
        Piece {
            id,
            kind,
            team,
            has_moved: false,
            position,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_king(&self) -> bool {
        matches!(self.kind, PieceType::King)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.to_team_char(self.team))
    }
}
