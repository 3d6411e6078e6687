//! Turn controller: owns the live board and alternates AI turns.

use log::{debug, info};
use parking_lot::Mutex;
use rand::rngs::StdRng;

use super::error::ControllerError;
use super::gate::{GateState, SearchGate};
use crate::board::{
    find_best_move_with, moves_for, Board, BoardError, Move, MoveGenerator, Piece, PieceWeights,
    SearchConfig, Shuffled, StandardMoves, Team, TileBoard, WeightTable,
};

/// Whether the game is still being played
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// A king was captured by `winner`
    Won { winner: Team },
}

/// Result of committing one move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub played: Move,
    pub captured: Option<Piece>,
    pub status: GameStatus,
    /// Side to move after this turn. Unchanged once the game is over.
    pub to_move: Team,
}

#[derive(Debug)]
struct TurnState {
    to_move: Team,
    status: GameStatus,
    turns: u32,
}

/// Drives a game between two AI sides, or between the AI and an external
/// caller that commits its own moves.
///
/// All methods take `&self`; the controller can be shared between a game
/// loop and whatever polls it. Only one search or commit runs at a time.
pub struct TurnController<G = StandardMoves, W = WeightTable> {
    board: Mutex<Board>,
    turn: Mutex<TurnState>,
    ordering: Mutex<Shuffled<StdRng>>,
    gate: SearchGate,
    movegen: G,
    weights: W,
    config: SearchConfig,
}

impl TurnController {
    /// Controller with the standard move rules and default weights
    #[must_use]
    pub fn new(board: Board, first: Team, config: SearchConfig) -> Self {
        Self::with_rules(board, first, config, StandardMoves, WeightTable::default())
    }
}

impl<G: MoveGenerator, W: PieceWeights> TurnController<G, W> {
    #[must_use]
    pub fn with_rules(
        board: Board,
        first: Team,
        config: SearchConfig,
        movegen: G,
        weights: W,
    ) -> Self {
        TurnController {
            board: Mutex::new(board),
            turn: Mutex::new(TurnState {
                to_move: first,
                status: GameStatus::InProgress,
                turns: 0,
            }),
            ordering: Mutex::new(Shuffled::from_seed_option(config.seed)),
            gate: SearchGate::new(),
            movegen,
            weights,
            config,
        }
    }

    #[must_use]
    pub fn to_move(&self) -> Team {
        self.turn.lock().to_move
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.turn.lock().status
    }

    /// Moves committed so far
    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.turn.lock().turns
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.gate.state() == GateState::Searching
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Copy of the live board
    #[must_use]
    pub fn board_snapshot(&self) -> Board {
        self.board.lock().clone()
    }

    /// Replace the board and restart the game with `first` to move.
    pub fn reset(&self, board: Board, first: Team) -> Result<(), ControllerError> {
        let _ticket = self.gate.try_begin().ok_or(ControllerError::Busy)?;
        *self.board.lock() = board;
        *self.turn.lock() = TurnState {
            to_move: first,
            status: GameStatus::InProgress,
            turns: 0,
        };
        Ok(())
    }

    /// Candidate moves for the side to move, in board scan order.
    #[must_use]
    pub fn candidate_moves(&self) -> Vec<Move> {
        let team = self.to_move();
        let board = self.board.lock();
        let tiles: Vec<_> = board
            .occupied()
            .into_iter()
            .filter(|&at| board.occupant(at).is_some_and(|p| p.team == team))
            .collect();
        moves_for(&*board, &self.movegen, &tiles)
    }

    /// Search for the side to move without changing the board.
    ///
    /// Fails with `Busy` if another search or commit is in flight.
    pub fn think(&self) -> Result<Move, ControllerError> {
        let _ticket = self.gate.try_begin().ok_or(ControllerError::Busy)?;
        let team = self.ready_side()?;
        self.search_for(team)
    }

    /// Apply `mv` to the live board for the side to move.
    pub fn commit(&self, mv: &Move) -> Result<TurnOutcome, ControllerError> {
        let _ticket = self.gate.try_begin().ok_or(ControllerError::Busy)?;
        self.ready_side()?;
        self.commit_move(mv)
    }

    /// Search and commit in one step.
    pub fn play_turn(&self) -> Result<TurnOutcome, ControllerError> {
        let _ticket = self.gate.try_begin().ok_or(ControllerError::Busy)?;
        let team = self.ready_side()?;
        let mv = self.search_for(team)?;
        self.commit_move(&mv)
    }

    fn ready_side(&self) -> Result<Team, ControllerError> {
        let turn = self.turn.lock();
        match turn.status {
            GameStatus::Won { winner } => Err(ControllerError::GameOver { winner }),
            GameStatus::InProgress => Ok(turn.to_move),
        }
    }

    fn search_for(&self, team: Team) -> Result<Move, ControllerError> {
        let mut board = self.board.lock();
        let mut ordering = self.ordering.lock();
        let result = find_best_move_with(
            &mut *board,
            &self.movegen,
            &self.weights,
            team,
            self.config.max_depth,
            &mut *ordering,
        );
        debug!(
            "{team} searched {} nodes, score {}",
            result.stats.nodes, result.score
        );
        result.best_move.ok_or(ControllerError::NoLegalMove { team })
    }

    fn commit_move(&self, mv: &Move) -> Result<TurnOutcome, ControllerError> {
        let mut board = self.board.lock();
        let mut turn = self.turn.lock();
        let team = turn.to_move;
        let stale = ControllerError::StaleMove {
            from: mv.from,
            to: mv.to,
        };

        let mover = board.piece_at(mv.from)?.ok_or(BoardError::EmptySquare {
            x: mv.from.x,
            y: mv.from.y,
        })?;
        if mover.id != mv.piece.id || mover.team != team || mv.from == mv.to {
            return Err(stale);
        }
        if board.piece_at(mv.to)?.is_some_and(|target| target.team == team) {
            return Err(stale);
        }

        let captured = board.take_occupant(mv.to);
        let mut piece = board.remove(mv.from)?;
        piece.position = mv.to;
        piece.has_moved = true;
        board.set_occupant(mv.to, Some(piece));

        turn.turns += 1;
        if captured.is_some_and(|p| p.is_king()) {
            turn.status = GameStatus::Won { winner: team };
            info!("{team} captured the king on {} after {} turns", mv.to, turn.turns);
        } else {
            turn.to_move = team.opponent();
        }
        debug!("turn {}: {team} played {mv}", turn.turns);

        Ok(TurnOutcome {
            played: Move { piece, ..*mv },
            captured,
            status: turn.status,
            to_move: turn.to_move,
        })
    }
}
