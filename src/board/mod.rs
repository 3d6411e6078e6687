//! Board representation and the minimax AI that plays on it.
//!
//! A square grid of tiles, each holding at most one piece. The search borrows
//! the board, tries candidate moves on it in place, and puts every tile back
//! the way it found it before returning.
//!
//! # Example
//! ```
//! use chess_ai::board::{find_best_move, Board, SearchConfig, StandardMoves, Team, WeightTable};
//!
//! let mut board = Board::new();
//! let config = SearchConfig::default().with_depth(2);
//! let weights = WeightTable::default();
//! let result = find_best_move(&mut board, &StandardMoves, &weights, Team::White, &config);
//! println!("White plays {}", result.best_move.unwrap());
//! ```

mod builder;
mod error;
mod eval;
mod make_unmake;
mod movegen;
pub mod prelude;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::BoardError;
pub use eval::{
    evaluate, Material, PieceWeights, WeightTable, DEFAULT_WEIGHTS, MAX_EVAL, MAX_PIECE_WEIGHT,
};
pub use make_unmake::{apply_move, undo_move, MoveHistory, ScopedMove, Simulator, Speculate};
pub use movegen::{create_move, moves_for, MoveGenerator, StandardMoves};
pub use search::{
    find_best_move, find_best_move_with, MoveOrdering, Natural, SearchConfig, SearchResult,
    SearchStats, Searcher, Shuffled, DEFAULT_MAX_DEPTH, INFINITY, NEG_INFINITY,
};
pub use state::{Board, TileBoard, DEFAULT_BOARD_SIZE};
pub use types::{Coord, Move, Piece, PieceId, PieceType, Team};
