//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::piece::Piece;

/// A hypothetical transition of one piece from `from` to `to`.
///
/// The moved and captured pieces are snapshots taken when the move was
/// created, which is what lets the simulator restore the board exactly.
/// `score` carries the backed-up search value for root moves.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub score: i32,
}

impl Move {
    #[must_use]
    pub const fn new(from: Coord, to: Coord, piece: Piece, captured: Option<Piece>) -> Self {
        Move {
            from,
            to,
            piece,
            captured,
            score: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub fn captures_king(&self) -> bool {
        self.captured.is_some_and(|p| p.is_king())
    }

    /// Same source and destination, ignoring snapshots and score
    #[inline]
    #[must_use]
    pub fn same_squares(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { "x" } else { "-" };
        write!(f, "{}{}{}{}", self.piece, self.from, sep, self.to)
    }
}
