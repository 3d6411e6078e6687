use super::super::{Coord, Piece, TileBoard};

pub(super) fn pawn_targets<B: TileBoard + ?Sized>(
    board: &B,
    piece: &Piece,
    from: Coord,
    targets: &mut Vec<Coord>,
) {
    let size = board.size();
    let dir = piece.team.forward();

    if let Some(one) = from.offset(0, dir, size) {
        if board.occupant(one).is_none() {
            targets.push(one);
            if !piece.has_moved {
                if let Some(two) = from.offset(0, 2 * dir, size) {
                    if board.occupant(two).is_none() {
                        targets.push(two);
                    }
                }
            }
        }
    }

    for dx in [-1, 1] {
        if let Some(diag) = from.offset(dx, dir, size) {
            if board.occupant(diag).is_some_and(|p| p.team != piece.team) {
                targets.push(diag);
            }
        }
    }
}
