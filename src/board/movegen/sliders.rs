use super::super::{Coord, Piece, PieceType, TileBoard};

const DIAGONALS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
const STRAIGHTS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const ALL_RAYS: [(i32, i32); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Ray directions for a sliding piece; non-sliders have none.
fn rays(kind: PieceType) -> &'static [(i32, i32)] {
    match kind {
        PieceType::Bishop => &DIAGONALS,
        PieceType::Rook => &STRAIGHTS,
        PieceType::Queen => &ALL_RAYS,
        PieceType::Pawn | PieceType::Knight | PieceType::King | PieceType::None => &[],
    }
}

pub(super) fn slider_targets<B: TileBoard + ?Sized>(
    board: &B,
    piece: &Piece,
    from: Coord,
    targets: &mut Vec<Coord>,
) {
    let size = board.size();
    for &(dx, dy) in rays(piece.kind) {
        let mut cur = from;
        while let Some(next) = cur.offset(dx, dy, size) {
            match board.occupant(next) {
                None => targets.push(next),
                Some(other) => {
                    if other.team != piece.team {
                        targets.push(next);
                    }
                    break;
                }
            }
            cur = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, Team};

    #[test]
    fn only_sliders_have_rays() {
        assert_eq!(rays(PieceType::Queen).len(), 8);
        for kind in PieceType::ALL.into_iter().chain([PieceType::None]) {
            assert_eq!(kind.is_slider(), !rays(kind).is_empty(), "{kind:?}");
        }
    }

    #[test]
    fn non_slider_gets_no_slider_targets() {
        let at = Coord::new(3, 3);
        for kind in [PieceType::King, PieceType::Knight, PieceType::Pawn] {
            let board = BoardBuilder::new()
                .piece(at, Team::White, kind)
                .build()
                .unwrap();
            let piece = *board.occupant(at).unwrap();
            let mut targets = Vec::new();
            slider_targets(&board, &piece, at, &mut targets);
            assert!(targets.is_empty(), "{kind:?} slid to {targets:?}");
        }
    }
}
