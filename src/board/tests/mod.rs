//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `make_unmake.rs` - Speculative apply/undo correctness
//! - `eval.rs` - Material evaluation
//! - `search.rs` - Search scenarios and invariants
//! - `proptest.rs` - Property-based tests

mod make_unmake;

use rand::prelude::*;

use super::{
    apply_move, evaluate, moves_for, undo_move, Board, Coord, Material, Move, MoveHistory,
    PieceType, StandardMoves, Team, TileBoard, WeightTable, INFINITY, NEG_INFINITY,
};

/// Board of `size` with `pieces` random placements (later ones may overwrite
/// earlier ones).
pub(super) fn random_board(seed: u64, size: usize, pieces: usize) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::empty(size).unwrap();
    for _ in 0..pieces {
        let at = Coord::new(rng.gen_range(0..size), rng.gen_range(0..size));
        let kind = PieceType::ALL[rng.gen_range(0..PieceType::ALL.len())];
        let team = if rng.gen_bool(0.5) { Team::White } else { Team::Black };
        board.place(at, kind, team).unwrap();
    }
    board
}

/// Plain minimax without pruning, used as a reference for alpha-beta.
///
/// A node without moves is worth the worst case for the side to move.
pub(super) fn minimax(board: &mut Board, side: Team, depth: i32, maximizing: bool) -> i32 {
    let weights = WeightTable::default();
    if depth <= 0 {
        return evaluate(board, side, &weights);
    }
    let team = if maximizing { side } else { side.opponent() };
    let material = Material::scan(board, side, &weights);
    let moves = moves_for(board, &StandardMoves, material.pieces_of(team, side));

    let mut best = if maximizing { NEG_INFINITY } else { INFINITY };
    let mut history = MoveHistory::new();
    for mv in moves {
        apply_move(board, &mut history, mv);
        let score = minimax(board, side, depth - 1, !maximizing);
        undo_move(board, &mut history);
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}

/// Every candidate move for `team` on `board`.
pub(super) fn all_moves(board: &Board, team: Team) -> Vec<Move> {
    let tiles: Vec<Coord> = board
        .occupied()
        .into_iter()
        .filter(|&c| board.occupant(c).is_some_and(|p| p.team == team))
        .collect();
    moves_for(board, &StandardMoves, &tiles)
}
