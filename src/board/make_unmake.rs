//! Speculative move application and exact reversal.
//!
//! A speculative move only swaps tile occupants: the moved piece keeps its
//! recorded position and `has_moved` flag, and nothing is permanently
//! captured. Every applied move is pushed onto a [`MoveHistory`] and reverted
//! from it in LIFO order.

use std::ops::{Deref, DerefMut};

use super::{Move, TileBoard};

/// Last-in-first-out record of applied speculative moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    #[must_use]
    pub fn new() -> Self {
        MoveHistory { moves: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Most recently applied move
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

/// Move the occupant of `mv.from` onto `mv.to`, overwriting any occupant
/// there, and record the move.
pub fn apply_move<B: TileBoard + ?Sized>(board: &mut B, history: &mut MoveHistory, mv: Move) {
    let moving = board.take_occupant(mv.from);
    board.set_occupant(mv.to, moving);
    history.moves.push(mv);
}

/// Revert the most recent move: the piece on the destination goes back to the
/// source and the captured piece, if any, returns to the destination.
///
/// Returns `None` and leaves the board alone when the history is empty.
pub fn undo_move<B: TileBoard + ?Sized>(board: &mut B, history: &mut MoveHistory) -> Option<Move> {
    let mv = history.moves.pop()?;
    let moved = board.set_occupant(mv.to, mv.captured);
    board.set_occupant(mv.from, moved);
    Some(mv)
}

/// Anything that can apply and revert speculative moves.
pub trait Speculate {
    fn apply_speculative(&mut self, mv: Move);

    fn undo_speculative(&mut self) -> Option<Move>;

    /// Apply `mv`, run `f`, then revert `mv`.
    ///
    /// The revert runs from a drop guard, so it also happens if `f` unwinds.
    fn with_move<R>(&mut self, mv: Move, f: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized,
    {
        let mut scope = ScopedMove::enter(self, mv);
        f(&mut scope)
    }
}

/// A speculative move that is reverted when the guard is dropped.
pub struct ScopedMove<'a, S: Speculate + ?Sized> {
    inner: &'a mut S,
}

impl<'a, S: Speculate + ?Sized> ScopedMove<'a, S> {
    pub fn enter(inner: &'a mut S, mv: Move) -> Self {
        inner.apply_speculative(mv);
        ScopedMove { inner }
    }
}

impl<S: Speculate + ?Sized> Deref for ScopedMove<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        &*self.inner
    }
}

impl<S: Speculate + ?Sized> DerefMut for ScopedMove<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut *self.inner
    }
}

impl<S: Speculate + ?Sized> Drop for ScopedMove<'_, S> {
    fn drop(&mut self) {
        let undone = self.inner.undo_speculative();
        debug_assert!(undone.is_some(), "scoped move had nothing to undo");
    }
}

/// A board borrowed for simulation, together with its undo history.
pub struct Simulator<'b, B: TileBoard + ?Sized> {
    board: &'b mut B,
    history: MoveHistory,
}

impl<'b, B: TileBoard + ?Sized> Simulator<'b, B> {
    pub fn new(board: &'b mut B) -> Self {
        Simulator {
            board,
            history: MoveHistory::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &B {
        &*self.board
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Number of speculative moves currently applied
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

impl<B: TileBoard + ?Sized> Speculate for Simulator<'_, B> {
    #[inline]
    fn apply_speculative(&mut self, mv: Move) {
        apply_move(&mut *self.board, &mut self.history, mv);
    }

    #[inline]
    fn undo_speculative(&mut self) -> Option<Move> {
        undo_move(&mut *self.board, &mut self.history)
    }
}
