use super::super::{Coord, Piece, TileBoard};
use super::can_land;

pub(super) fn king_targets<B: TileBoard + ?Sized>(
    board: &B,
    piece: &Piece,
    from: Coord,
    targets: &mut Vec<Coord>,
) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if let Some(to) = from.offset(dx, dy, board.size()) {
                if can_land(board, piece, to) {
                    targets.push(to);
                }
            }
        }
    }
}
