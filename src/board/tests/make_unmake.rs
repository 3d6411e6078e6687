//! Speculative apply/undo tests.

use std::panic::{catch_unwind, AssertUnwindSafe};

use super::all_moves;
use crate::board::{
    apply_move, create_move, undo_move, Board, BoardBuilder, Coord, MoveHistory, PieceType,
    ScopedMove, Simulator, Speculate, Team, TileBoard,
};

fn capture_board() -> Board {
    BoardBuilder::new()
        .piece(Coord::new(0, 0), Team::White, PieceType::Rook)
        .piece(Coord::new(0, 5), Team::Black, PieceType::Pawn)
        .piece(Coord::new(7, 7), Team::Black, PieceType::King)
        .build()
        .unwrap()
}

#[test]
fn test_every_opening_move_round_trips() {
    let mut board = Board::new();
    let original = board.clone();
    let mut history = MoveHistory::new();
    for team in Team::BOTH {
        for mv in all_moves(&original, team) {
            apply_move(&mut board, &mut history, mv);
            assert_eq!(history.len(), 1);
            let undone = undo_move(&mut board, &mut history);
            assert_eq!(undone, Some(mv));
            assert_eq!(board, original, "board differs after {mv}");
        }
    }
    assert!(history.is_empty());
}

#[test]
fn test_capture_overwrites_and_restores_identity() {
    let mut board = capture_board();
    let original = board.clone();
    let pawn_id = board.occupant(Coord::new(0, 5)).unwrap().id;
    let mv = create_move(&board, Coord::new(0, 0), Coord::new(0, 5)).unwrap();

    let mut history = MoveHistory::new();
    apply_move(&mut board, &mut history, mv);
    assert!(board.occupant(Coord::new(0, 0)).is_none());
    assert_eq!(board.occupant(Coord::new(0, 5)).unwrap().kind, PieceType::Rook);
    assert_eq!(board.piece_count(), 2);

    undo_move(&mut board, &mut history);
    assert_eq!(board.occupant(Coord::new(0, 5)).unwrap().id, pawn_id);
    assert_eq!(board, original);
}

#[test]
fn test_apply_leaves_piece_attributes_alone() {
    let mut board = Board::new();
    let from = Coord::new(4, 1);
    let to = Coord::new(4, 3);
    let mv = create_move(&board, from, to).unwrap();
    let mut history = MoveHistory::new();
    apply_move(&mut board, &mut history, mv);

    let pawn = board.occupant(to).unwrap();
    assert!(!pawn.has_moved);
    assert_eq!(pawn.position, from);
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut board = Board::new();
    let original = board.clone();
    let mut history = MoveHistory::new();
    assert_eq!(undo_move(&mut board, &mut history), None);
    assert_eq!(board, original);
}

#[test]
fn test_nested_moves_unwind_in_order() {
    let mut board = Board::new();
    let original = board.clone();
    let mut history = MoveHistory::new();

    let white = create_move(&board, Coord::new(4, 1), Coord::new(4, 3)).unwrap();
    apply_move(&mut board, &mut history, white);
    let black = create_move(&board, Coord::new(3, 6), Coord::new(3, 4)).unwrap();
    apply_move(&mut board, &mut history, black);
    let take = create_move(&board, Coord::new(4, 3), Coord::new(3, 4)).unwrap();
    assert!(take.is_capture());
    apply_move(&mut board, &mut history, take);
    assert_eq!(history.len(), 3);
    assert_eq!(history.last(), Some(&take));

    assert_eq!(undo_move(&mut board, &mut history), Some(take));
    assert_eq!(undo_move(&mut board, &mut history), Some(black));
    assert_eq!(undo_move(&mut board, &mut history), Some(white));
    assert_eq!(board, original);
}

#[test]
fn test_with_move_reverts_after_closure() {
    let mut board = capture_board();
    let original = board.clone();
    let mv = create_move(&board, Coord::new(0, 0), Coord::new(0, 5)).unwrap();
    {
        let mut sim = Simulator::new(&mut board);
        let pieces_inside = sim.with_move(mv, |s| {
            assert_eq!(s.depth(), 1);
            s.board().piece_count()
        });
        assert_eq!(pieces_inside, 2);
        assert_eq!(sim.depth(), 0);
    }
    assert_eq!(board, original);
}

#[test]
fn test_scoped_move_reverts_on_early_drop() {
    let mut board = capture_board();
    let original = board.clone();
    let mv = create_move(&board, Coord::new(0, 0), Coord::new(0, 3)).unwrap();
    {
        let mut sim = Simulator::new(&mut board);
        let scope = ScopedMove::enter(&mut sim, mv);
        assert!(scope.board().occupant(Coord::new(0, 3)).is_some());
        drop(scope);
        assert!(sim.history().is_empty());
    }
    assert_eq!(board, original);
}

#[test]
fn test_with_move_reverts_when_closure_panics() {
    let mut board = capture_board();
    let original = board.clone();
    let mv = create_move(&board, Coord::new(0, 0), Coord::new(0, 5)).unwrap();
    {
        let mut sim = Simulator::new(&mut board);
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            sim.with_move(mv, |_| panic!("search blew up"));
        }));
        assert!(outcome.is_err());
        assert_eq!(sim.depth(), 0);
    }
    assert_eq!(board, original);
}
