use std::fmt;

use super::error::BoardError;
use super::{Coord, Piece, PieceId, PieceType, Team};

/// Default board edge length
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Occupancy access to a square grid of tiles.
///
/// This is the only view of the board the search needs: it reads occupants
/// and swaps them in place while simulating moves.
pub trait TileBoard {
    /// Edge length of the board
    fn size(&self) -> usize;

    /// The piece on `at`, if any. Off-board coordinates are empty.
    fn occupant(&self, at: Coord) -> Option<&Piece>;

    /// Replace the occupant of `at`, returning the previous one.
    ///
    /// # Panics
    /// Panics if `at` is outside the board.
    fn set_occupant(&mut self, at: Coord, piece: Option<Piece>) -> Option<Piece>;

    /// Remove and return the occupant of `at`.
    fn take_occupant(&mut self, at: Coord) -> Option<Piece> {
        self.set_occupant(at, None)
    }

    #[inline]
    fn contains(&self, at: Coord) -> bool {
        at.x < self.size() && at.y < self.size()
    }

    /// All occupied tiles in row-major order (y outer, x inner)
    fn occupied(&self) -> Vec<Coord> {
        let size = self.size();
        let mut tiles = Vec::new();
        for y in 0..size {
            for x in 0..size {
                let at = Coord::new(x, y);
                if self.occupant(at).is_some() {
                    tiles.push(at);
                }
            }
        }
        tiles
    }
}

/// A square board of tiles, each holding at most one piece.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) size: usize,
    pub(crate) tiles: Vec<Option<Piece>>,
    pub(crate) next_id: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard 8×8 starting position
    #[must_use]
    pub fn new() -> Self {
        let size = DEFAULT_BOARD_SIZE;
        let mut board = Board {
            size,
            tiles: vec![None; size * size],
            next_id: 0,
        };
        for (at, team, kind) in super::builder::standard_layout() {
            let id = PieceId(board.next_id);
            board.next_id += 1;
            board.tiles[at.index(size)] = Some(Piece::new(id, kind, team, at));
        }
        board
    }

    /// An empty board with the given edge length.
    pub fn empty(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize { size });
        }
        Ok(Board {
            size,
            tiles: vec![None; size * size],
            next_id: 0,
        })
    }

    fn check(&self, at: Coord) -> Result<usize, BoardError> {
        if self.contains(at) {
            Ok(at.index(self.size))
        } else {
            Err(BoardError::OutOfBounds {
                x: at.x,
                y: at.y,
                size: self.size,
            })
        }
    }

    /// Put a new piece on `at`, replacing whatever was there.
    pub fn place(&mut self, at: Coord, kind: PieceType, team: Team) -> Result<PieceId, BoardError> {
        let idx = self.check(at)?;
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.tiles[idx] = Some(Piece::new(id, kind, team, at));
        Ok(id)
    }

    /// Bounds-checked occupant lookup
    pub fn piece_at(&self, at: Coord) -> Result<Option<&Piece>, BoardError> {
        let idx = self.check(at)?;
        Ok(self.tiles[idx].as_ref())
    }

    /// Remove the piece on `at`, failing if the tile is empty.
    pub fn remove(&mut self, at: Coord) -> Result<Piece, BoardError> {
        let idx = self.check(at)?;
        self.tiles[idx]
            .take()
            .ok_or(BoardError::EmptySquare { x: at.x, y: at.y })
    }

    pub(crate) fn piece_mut(&mut self, at: Coord) -> Result<&mut Piece, BoardError> {
        let idx = self.check(at)?;
        self.tiles[idx]
            .as_mut()
            .ok_or(BoardError::EmptySquare { x: at.x, y: at.y })
    }

    /// Pieces belonging to `team`, in row-major order
    pub fn pieces(&self, team: Team) -> impl Iterator<Item = &Piece> + '_ {
        self.tiles.iter().flatten().filter(move |p| p.team == team)
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.tiles.iter().flatten().count()
    }

    /// Location of `team`'s king, if it is still on the board
    #[must_use]
    pub fn king_square(&self, team: Team) -> Option<Coord> {
        self.tiles.iter().enumerate().find_map(|(idx, tile)| match tile {
            Some(p) if p.team == team && p.is_king() => Some(Coord::from_index(idx, self.size)),
            _ => None,
        })
    }
}

impl TileBoard for Board {
    #[inline]
    fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn occupant(&self, at: Coord) -> Option<&Piece> {
        if !self.contains(at) {
            return None;
        }
        self.tiles[at.index(self.size)].as_ref()
    }

    #[inline]
    fn set_occupant(&mut self, at: Coord, piece: Option<Piece>) -> Option<Piece> {
        assert!(self.contains(at), "tile {at} is off the board");
        let idx = at.index(self.size);
        std::mem::replace(&mut self.tiles[idx], piece)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.size).rev() {
            write!(f, "{:>2} ", y + 1)?;
            for x in 0..self.size {
                match self.occupant(Coord::new(x, y)) {
                    Some(p) => write!(f, " {p}")?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for x in 0..self.size.min(26) {
            write!(f, " {}", (b'a' + x as u8) as char)?;
        }
        writeln!(f)
    }
}
