pub mod board;
pub mod engine;

pub use board::{
    find_best_move, Board, Coord, Move, Piece, PieceType, SearchConfig, SearchResult, Team,
};
pub use engine::{ControllerError, GameStatus, TurnController};
