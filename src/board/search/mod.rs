//! Minimax search with alpha-beta pruning.
//!
//! Features:
//! - Fixed-depth recursion, maximizing for the searching side and minimizing
//!   for its opponent
//! - Material evaluation rebuilt from the live board at every node
//! - Speculative moves reverted through a scoped guard on every exit path
//! - Per-node move shuffling from an injected, seedable random source
//!
//! The board is borrowed mutably for the whole search and is back in its
//! original state when the search returns.

mod move_order;
mod params;

use std::time::Instant;

use log::{debug, trace};

use super::eval::{evaluate, Material, PieceWeights};
use super::make_unmake::{Simulator, Speculate};
use super::movegen::{moves_for, MoveGenerator};
use super::{Move, Team, TileBoard};

pub use move_order::{MoveOrdering, Natural, Shuffled};
pub use params::{SearchConfig, DEFAULT_MAX_DEPTH};

/// Upper search bound
pub const INFINITY: i32 = i32::MAX;
/// Lower search bound, the initial alpha of a root search
pub const NEG_INFINITY: i32 = -INFINITY;

/// Statistics tracked during a search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Sibling loops stopped early by a bound
    pub cutoffs: u64,
}

/// Outcome of a root search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Best root move, with its backed-up value in `score`.
    ///
    /// `None` only when the side to move had no candidate moves or the
    /// requested depth was zero or less. A root whose every move loses still
    /// reports one of them, scored `NEG_INFINITY`.
    pub best_move: Option<Move>,
    /// Backed-up value of the root. `NEG_INFINITY` when there was no move to
    /// search, the static evaluation for depth zero or less.
    pub score: i32,
    pub stats: SearchStats,
}

/// Search state for one side over one borrowed board.
pub struct Searcher<'a, B, G, W, O>
where
    B: TileBoard + ?Sized,
    G: MoveGenerator + ?Sized,
    W: PieceWeights + ?Sized,
    O: MoveOrdering + ?Sized,
{
    sim: Simulator<'a, B>,
    movegen: &'a G,
    weights: &'a W,
    ordering: &'a mut O,
    side: Team,
    max_depth: i32,
    material: Material,
    best_move: Option<Move>,
    stats: SearchStats,
}

impl<'a, B, G, W, O> Searcher<'a, B, G, W, O>
where
    B: TileBoard + ?Sized,
    G: MoveGenerator + ?Sized,
    W: PieceWeights + ?Sized,
    O: MoveOrdering + ?Sized,
{
    pub fn new(
        board: &'a mut B,
        movegen: &'a G,
        weights: &'a W,
        ordering: &'a mut O,
        side: Team,
    ) -> Self {
        Searcher {
            sim: Simulator::new(board),
            movegen,
            weights,
            ordering,
            side,
            max_depth: 0,
            material: Material::default(),
            best_move: None,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &B {
        self.sim.board()
    }

    #[inline]
    #[must_use]
    pub fn side(&self) -> Team {
        self.side
    }

    /// Speculative moves currently applied below the root
    #[inline]
    #[must_use]
    pub fn pending_moves(&self) -> usize {
        self.sim.depth()
    }

    #[inline]
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Static evaluation of the current board for the searching side
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        evaluate(self.sim.board(), self.side, self.weights)
    }

    /// Search the root position to `max_depth` plies and pick the best move.
    pub fn best_move(&mut self, max_depth: i32) -> SearchResult {
        let start = Instant::now();
        self.stats = SearchStats::default();
        self.best_move = None;
        self.max_depth = max_depth;

        let score = self.search(max_depth, NEG_INFINITY, INFINITY, true);
        debug_assert!(self.sim.history().is_empty(), "unbalanced speculative moves");

        let best_move = if max_depth > 0 { self.best_move.take() } else { None };
        debug!(
            "search side={} depth={} nodes={} cutoffs={} score={} best={} elapsed={:?}",
            self.side,
            max_depth,
            self.stats.nodes,
            self.stats.cutoffs,
            score,
            best_move.map_or_else(|| "none".to_string(), |m| m.to_string()),
            start.elapsed()
        );

        SearchResult {
            best_move,
            score,
            stats: self.stats,
        }
    }

    /// One node of the minimax recursion.
    ///
    /// Returns the static evaluation at `depth <= 0`. Otherwise returns
    /// `alpha` for maximizing nodes and `beta` for minimizing ones, so a node
    /// without candidate moves hands back its bound unchanged.
    pub fn search(&mut self, depth: i32, mut alpha: i32, mut beta: i32, maximizing: bool) -> i32 {
        self.stats.nodes += 1;
        self.material.rescan(self.sim.board(), self.side, self.weights);

        if depth <= 0 {
            return self.material.balance();
        }

        let team = if maximizing { self.side } else { self.side.opponent() };
        let mut moves = moves_for(
            self.sim.board(),
            self.movegen,
            self.material.pieces_of(team, self.side),
        );
        self.ordering.order(&mut moves);

        if maximizing {
            for mut mv in moves {
                let score = self.with_move(mv, |s| s.search(depth - 1, alpha, beta, false));
                let improved = score > alpha;
                if improved {
                    alpha = score;
                }
                // A root with candidates always reports one, even if all of them lose
                if depth == self.max_depth && (improved || self.best_move.is_none()) {
                    mv.score = score;
                    trace!("root {mv} -> {score}");
                    self.best_move = Some(mv);
                }
                if score >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            alpha
        } else {
            for mv in moves {
                let score = self.with_move(mv, |s| s.search(depth - 1, alpha, beta, true));
                if score < beta {
                    beta = score;
                }
                if score <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            beta
        }
    }
}

impl<B, G, W, O> Speculate for Searcher<'_, B, G, W, O>
where
    B: TileBoard + ?Sized,
    G: MoveGenerator + ?Sized,
    W: PieceWeights + ?Sized,
    O: MoveOrdering + ?Sized,
{
    #[inline]
    fn apply_speculative(&mut self, mv: Move) {
        self.sim.apply_speculative(mv);
    }

    #[inline]
    fn undo_speculative(&mut self) -> Option<Move> {
        self.sim.undo_speculative()
    }
}

/// Best move for `side` with an explicit move ordering.
pub fn find_best_move_with<B, G, W, O>(
    board: &mut B,
    movegen: &G,
    weights: &W,
    side: Team,
    max_depth: i32,
    ordering: &mut O,
) -> SearchResult
where
    B: TileBoard + ?Sized,
    G: MoveGenerator + ?Sized,
    W: PieceWeights + ?Sized,
    O: MoveOrdering + ?Sized,
{
    Searcher::new(board, movegen, weights, ordering, side).best_move(max_depth)
}

/// Best move for `side`, shuffling candidates as configured.
///
/// # Example
/// ```
/// use chess_ai::board::{find_best_move, Board, SearchConfig, StandardMoves, Team, WeightTable};
///
/// let mut board = Board::new();
/// let config = SearchConfig::default().with_depth(2).with_seed(1);
/// let weights = WeightTable::default();
/// let result = find_best_move(&mut board, &StandardMoves, &weights, Team::White, &config);
/// assert!(result.best_move.is_some());
/// assert_eq!(board, Board::new());
/// ```
pub fn find_best_move<B, G, W>(
    board: &mut B,
    movegen: &G,
    weights: &W,
    side: Team,
    config: &SearchConfig,
) -> SearchResult
where
    B: TileBoard + ?Sized,
    G: MoveGenerator + ?Sized,
    W: PieceWeights + ?Sized,
{
    let mut ordering = Shuffled::from_seed_option(config.seed);
    find_best_move_with(board, movegen, weights, side, config.max_depth, &mut ordering)
}
