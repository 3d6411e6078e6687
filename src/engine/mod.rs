//! Turn control around the search.
//!
//! The board layer knows nothing about whose turn it is or whether a search
//! is running. This module owns the live board, guards it with a two-state
//! gate so a polling caller can never start overlapping searches, commits
//! chosen moves, and ends the game when a king is captured.

mod controller;
mod error;
mod gate;

pub use controller::{GameStatus, TurnController, TurnOutcome};
pub use error::ControllerError;
pub use gate::{GateState, SearchGate, SearchTicket};
