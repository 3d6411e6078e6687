use super::super::{Coord, Piece, TileBoard};
use super::can_land;

const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(super) fn knight_targets<B: TileBoard + ?Sized>(
    board: &B,
    piece: &Piece,
    from: Coord,
    targets: &mut Vec<Coord>,
) {
    for (dx, dy) in KNIGHT_JUMPS {
        if let Some(to) = from.offset(dx, dy, board.size()) {
            if can_land(board, piece, to) {
                targets.push(to);
            }
        }
    }
}
