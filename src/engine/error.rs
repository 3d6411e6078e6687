//! Error types for turn control.

use std::fmt;

use crate::board::{BoardError, Coord, Team};

/// Error type for turn controller operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// A search or commit is already in flight
    Busy,
    /// The game ended with a king capture
    GameOver { winner: Team },
    /// The side to move has no candidate moves
    NoLegalMove { team: Team },
    /// The move does not match the piece currently on its source tile
    StaleMove { from: Coord, to: Coord },
    /// Underlying board access failed
    Board(BoardError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::Busy => write!(f, "A search is already in progress"),
            ControllerError::GameOver { winner } => {
                write!(f, "Game is over, {winner} won")
            }
            ControllerError::NoLegalMove { team } => {
                write!(f, "{team} has no legal move")
            }
            ControllerError::StaleMove { from, to } => {
                write!(f, "Move {from}-{to} does not match the board")
            }
            ControllerError::Board(err) => write!(f, "Board error: {err}"),
        }
    }
}

impl std::error::Error for ControllerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ControllerError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for ControllerError {
    fn from(err: BoardError) -> Self {
        ControllerError::Board(err)
    }
}
