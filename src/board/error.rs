//! Error types for board operations.

use std::fmt;

/// Error type for board access and construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the board
    OutOfBounds { x: usize, y: usize, size: usize },
    /// Expected a piece on this tile but it is empty
    EmptySquare { x: usize, y: usize },
    /// Board size must be at least 1
    InvalidSize { size: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y, size } => {
                write!(f, "Tile ({x}, {y}) is outside the {size}x{size} board")
            }
            BoardError::EmptySquare { x, y } => {
                write!(f, "No piece on tile ({x}, {y})")
            }
            BoardError::InvalidSize { size } => {
                write!(f, "Invalid board size {size}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = BoardError::OutOfBounds { x: 9, y: 2, size: 8 };
        let msg = err.to_string();
        assert!(msg.contains("(9, 2)"));
        assert!(msg.contains("8x8"));
    }

    #[test]
    fn test_empty_square_display() {
        let err = BoardError::EmptySquare { x: 4, y: 1 };
        assert!(err.to_string().contains("(4, 1)"));
    }

    #[test]
    fn test_invalid_size_display() {
        let err = BoardError::InvalidSize { size: 0 };
        assert!(err.to_string().contains('0'));
    }

    #[test]
    fn test_error_clone() {
        let err = BoardError::EmptySquare { x: 1, y: 1 };
        assert_eq!(err.clone(), err);
    }
}
