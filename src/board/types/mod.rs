//! Core game types.
//!
//! - `PieceType`, `Team`, `Piece` and `PieceId` - pieces and their owners
//! - `Coord` - tile coordinates
//! - `Move` - a candidate transition with its capture snapshot

mod coord;
mod moves;
mod piece;

pub use coord::Coord;
pub use moves::Move;
pub use piece::{Piece, PieceId, PieceType, Team};
