//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_ai::board::prelude::*;
//! ```

pub use super::{
    find_best_move, Board, BoardBuilder, BoardError, Coord, Move, MoveGenerator, Piece,
    PieceType, PieceWeights, SearchConfig, SearchResult, StandardMoves, Team, TileBoard,
    WeightTable,
};
