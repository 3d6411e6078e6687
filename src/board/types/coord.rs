//! Tile coordinates.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A tile on the board, identified by column `x` and row `y`.
///
/// Row 0 is White's home row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Coord { x, y }
    }

    /// Offset this coordinate, returning `None` if the result leaves a
    /// `size`×`size` board.
    #[inline]
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32, size: usize) -> Option<Coord> {
        let x = self.x as i64 + i64::from(dx);
        let y = self.y as i64 + i64::from(dy);
        if x < 0 || y < 0 || x >= size as i64 || y >= size as i64 {
            return None;
        }
        Some(Coord::new(x as usize, y as usize))
    }

    /// Row-major index on a board of the given size
    #[inline]
    #[must_use]
    pub(crate) const fn index(self, size: usize) -> usize {
        self.y * size + self.x
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize, size: usize) -> Self {
        Coord::new(idx % size, idx / size)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.x < 26 {
            let file = (b'a' + self.x as u8) as char;
            write!(f, "{}{}", file, self.y + 1)
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stays_on_board() {
        let c = Coord::new(0, 7);
        assert_eq!(c.offset(-1, 0, 8), None);
        assert_eq!(c.offset(0, 1, 8), None);
        assert_eq!(c.offset(1, -1, 8), Some(Coord::new(1, 6)));
    }

    #[test]
    fn index_round_trip() {
        let c = Coord::new(3, 5);
        assert_eq!(Coord::from_index(c.index(8), 8), c);
        assert_eq!(Coord::new(0, 1).index(6), 6);
    }

    #[test]
    fn display_is_algebraic() {
        assert_eq!(Coord::new(4, 1).to_string(), "e2");
        assert_eq!(Coord::new(0, 0).to_string(), "a1");
        assert_eq!(Coord::new(30, 2).to_string(), "(30, 2)");
    }
}
