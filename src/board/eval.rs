//! Material evaluation.
//!
//! The score of a position is the weight of the searching side's pieces minus
//! the weight of the opponent's. Scores and piece lists are always rebuilt
//! from the live board, including boards that carry speculative moves.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Coord, PieceType, Team, TileBoard};

/// Material weight of each piece type.
pub trait PieceWeights {
    /// Weight of `kind`. `PieceType::None` must weigh zero.
    fn weight(&self, kind: PieceType) -> i32;
}

/// Fixed weight per piece type, indexed like `PieceType::ALL`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightTable {
    weights: [i32; 6],
}

/// Pawn, knight, bishop, rook, queen, king
pub const DEFAULT_WEIGHTS: [i32; 6] = [10, 30, 30, 50, 90, 900];

/// Largest weight a `WeightTable` accepts.
pub const MAX_PIECE_WEIGHT: i32 = 1_000_000;

/// Static evaluations are clamped to this magnitude so they never reach the
/// search bounds.
pub const MAX_EVAL: i32 = i32::MAX - 1;

impl Default for WeightTable {
    fn default() -> Self {
        WeightTable {
            weights: DEFAULT_WEIGHTS,
        }
    }
}

impl WeightTable {
    /// Build a table from weights in `PieceType::ALL` order.
    ///
    /// Weights are clamped to `1..=MAX_PIECE_WEIGHT`.
    #[must_use]
    pub fn new(weights: [i32; 6]) -> Self {
        WeightTable {
            weights: weights.map(|w| w.clamp(1, MAX_PIECE_WEIGHT)),
        }
    }

    /// Same table with one entry replaced.
    #[must_use]
    pub fn with(mut self, kind: PieceType, weight: i32) -> Self {
        if let Some(idx) = kind.index() {
            self.weights[idx] = weight.clamp(1, MAX_PIECE_WEIGHT);
        }
        self
    }
}

impl PieceWeights for WeightTable {
    #[inline]
    fn weight(&self, kind: PieceType) -> i32 {
        kind.index().map_or(0, |idx| self.weights[idx])
    }
}

/// Material balance and piece locations of both sides, from one board scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Material {
    pub my_score: i32,
    pub opponent_score: i32,
    pub my_pieces: Vec<Coord>,
    pub opponent_pieces: Vec<Coord>,
}

impl Material {
    /// Scan `board` from `side`'s point of view.
    pub fn scan<B, W>(board: &B, side: Team, weights: &W) -> Self
    where
        B: TileBoard + ?Sized,
        W: PieceWeights + ?Sized,
    {
        let mut material = Material::default();
        material.rescan(board, side, weights);
        material
    }

    /// Rebuild in place, reusing the list allocations.
    pub fn rescan<B, W>(&mut self, board: &B, side: Team, weights: &W)
    where
        B: TileBoard + ?Sized,
        W: PieceWeights + ?Sized,
    {
        self.my_score = 0;
        self.opponent_score = 0;
        self.my_pieces.clear();
        self.opponent_pieces.clear();

        let size = board.size();
        for y in 0..size {
            for x in 0..size {
                let at = Coord::new(x, y);
                let Some(piece) = board.occupant(at) else {
                    continue;
                };
                if piece.kind == PieceType::None {
                    continue;
                }
                let w = weights.weight(piece.kind);
                if piece.team == side {
                    self.my_score = self.my_score.saturating_add(w);
                    self.my_pieces.push(at);
                } else {
                    self.opponent_score = self.opponent_score.saturating_add(w);
                    self.opponent_pieces.push(at);
                }
            }
        }
    }

    /// `my_score - opponent_score`, saturated to `±MAX_EVAL`
    #[inline]
    #[must_use]
    pub fn balance(&self) -> i32 {
        self.my_score
            .saturating_sub(self.opponent_score)
            .clamp(-MAX_EVAL, MAX_EVAL)
    }

    /// Piece list for `team`, given the side this material was scanned for.
    #[inline]
    #[must_use]
    pub fn pieces_of(&self, team: Team, side: Team) -> &[Coord] {
        if team == side {
            &self.my_pieces
        } else {
            &self.opponent_pieces
        }
    }
}

/// Material difference of `board` from `side`'s point of view.
pub fn evaluate<B, W>(board: &B, side: Team, weights: &W) -> i32
where
    B: TileBoard + ?Sized,
    W: PieceWeights + ?Sized,
{
    Material::scan(board, side, weights).balance()
}
