//! Candidate move generation.
//!
//! The search only needs destinations for a piece standing on a tile; it does
//! not care how they are produced. [`StandardMoves`] is the reference
//! generator with simplified chess movement: no castling, en passant,
//! promotion or check detection.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Coord, Move, Piece, PieceType, TileBoard};

/// Produces the tiles a piece could move to, independent of search state.
pub trait MoveGenerator {
    /// Destinations for `piece` standing on `from`.
    fn destinations<B: TileBoard + ?Sized>(
        &self,
        board: &B,
        piece: &Piece,
        from: Coord,
    ) -> Vec<Coord>;
}

/// Simplified chess movement on a board of any size.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardMoves;

impl MoveGenerator for StandardMoves {
    fn destinations<B: TileBoard + ?Sized>(
        &self,
        board: &B,
        piece: &Piece,
        from: Coord,
    ) -> Vec<Coord> {
        let mut targets = Vec::new();
        match piece.kind {
            PieceType::Pawn => pawns::pawn_targets(board, piece, from, &mut targets),
            PieceType::Knight => knights::knight_targets(board, piece, from, &mut targets),
            PieceType::Bishop | PieceType::Rook | PieceType::Queen => {
                sliders::slider_targets(board, piece, from, &mut targets);
            }
            PieceType::King => kings::king_targets(board, piece, from, &mut targets),
            PieceType::None => {}
        }
        targets
    }
}

/// True if `at` is on the board and not held by `piece`'s own team.
#[inline]
pub(crate) fn can_land<B: TileBoard + ?Sized>(board: &B, piece: &Piece, at: Coord) -> bool {
    board.occupant(at).map_or(true, |p| p.team != piece.team)
}

/// Build a move from `from` to `to`, snapshotting the mover and any captured
/// piece from the current board.
///
/// Returns `None` if `from` is empty.
pub fn create_move<B: TileBoard + ?Sized>(board: &B, from: Coord, to: Coord) -> Option<Move> {
    let piece = *board.occupant(from)?;
    Some(Move::new(from, to, piece, board.occupant(to).copied()))
}

/// All candidate moves for the pieces on `tiles`, in tile order.
pub fn moves_for<B, G>(board: &B, movegen: &G, tiles: &[Coord]) -> Vec<Move>
where
    B: TileBoard + ?Sized,
    G: MoveGenerator + ?Sized,
{
    let mut moves = Vec::new();
    for &from in tiles {
        let Some(piece) = board.occupant(from) else {
            continue;
        };
        for to in movegen.destinations(board, piece, from) {
            if let Some(mv) = create_move(board, from, to) {
                moves.push(mv);
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, BoardBuilder, Team};

    fn targets(board: &Board, at: Coord) -> Vec<Coord> {
        let piece = board.occupant(at).unwrap();
        let mut t = StandardMoves.destinations(board, piece, at);
        t.sort();
        t
    }

    #[test]
    fn test_starting_position_move_count() {
        let board = Board::new();
        let tiles: Vec<Coord> = board
            .occupied()
            .into_iter()
            .filter(|&c| board.occupant(c).is_some_and(|p| p.team == Team::White))
            .collect();
        // 16 pawn moves + 4 knight moves
        assert_eq!(moves_for(&board, &StandardMoves, &tiles).len(), 20);
    }

    #[test]
    fn test_pawn_double_step_only_before_moving() {
        let fresh = BoardBuilder::new()
            .piece(Coord::new(3, 1), Team::White, PieceType::Pawn)
            .build()
            .unwrap();
        assert_eq!(
            targets(&fresh, Coord::new(3, 1)),
            vec![Coord::new(3, 2), Coord::new(3, 3)]
        );

        let moved = BoardBuilder::new()
            .moved_piece(Coord::new(3, 1), Team::White, PieceType::Pawn)
            .build()
            .unwrap();
        assert_eq!(targets(&moved, Coord::new(3, 1)), vec![Coord::new(3, 2)]);
    }

    #[test]
    fn test_pawn_blocked_and_captures() {
        let board = BoardBuilder::new()
            .piece(Coord::new(3, 6), Team::Black, PieceType::Pawn)
            .piece(Coord::new(3, 5), Team::White, PieceType::Knight)
            .piece(Coord::new(2, 5), Team::White, PieceType::Bishop)
            .piece(Coord::new(4, 5), Team::Black, PieceType::Rook)
            .build()
            .unwrap();
        // Black pawn moves down the board; blocked ahead, can only take the bishop
        assert_eq!(targets(&board, Coord::new(3, 6)), vec![Coord::new(2, 5)]);
    }

    #[test]
    fn test_knight_in_corner() {
        let board = BoardBuilder::new()
            .piece(Coord::new(0, 0), Team::White, PieceType::Knight)
            .piece(Coord::new(1, 2), Team::White, PieceType::Pawn)
            .build()
            .unwrap();
        assert_eq!(targets(&board, Coord::new(0, 0)), vec![Coord::new(2, 1)]);
    }

    #[test]
    fn test_rook_stops_at_blockers() {
        let board = BoardBuilder::new()
            .size(4)
            .piece(Coord::new(0, 0), Team::White, PieceType::Rook)
            .piece(Coord::new(0, 2), Team::Black, PieceType::Pawn)
            .piece(Coord::new(2, 0), Team::White, PieceType::Pawn)
            .build()
            .unwrap();
        assert_eq!(
            targets(&board, Coord::new(0, 0)),
            vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]
        );
    }

    #[test]
    fn test_queen_on_open_board() {
        let board = BoardBuilder::new()
            .piece(Coord::new(3, 3), Team::White, PieceType::Queen)
            .build()
            .unwrap();
        assert_eq!(targets(&board, Coord::new(3, 3)).len(), 27);
    }

    #[test]
    fn test_king_single_steps() {
        let board = BoardBuilder::new()
            .piece(Coord::new(0, 0), Team::White, PieceType::King)
            .piece(Coord::new(1, 1), Team::Black, PieceType::Pawn)
            .build()
            .unwrap();
        assert_eq!(
            targets(&board, Coord::new(0, 0)),
            vec![Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]
        );
    }

    #[test]
    fn test_create_move_snapshots_capture() {
        let board = BoardBuilder::new()
            .piece(Coord::new(0, 0), Team::White, PieceType::Rook)
            .piece(Coord::new(0, 5), Team::Black, PieceType::Pawn)
            .build()
            .unwrap();
        let mv = create_move(&board, Coord::new(0, 0), Coord::new(0, 5)).unwrap();
        assert_eq!(mv.piece.kind, PieceType::Rook);
        assert_eq!(mv.captured.map(|p| p.kind), Some(PieceType::Pawn));
        assert!(create_move(&board, Coord::new(4, 4), Coord::new(4, 5)).is_none());
    }
}
