//! # morris-engine
//!
//! A rules engine for Nine Men's Morris.
//!
//! The engine owns the whole game state and is the only authority on whether
//! a placement, move or removal is legal, and on what follows from it: mills,
//! stage changes, victory.
//!
//! ## Design Principles
//!
//! 1. **One mutating entry point**: `Board::perform_move`. Every check runs
//!    before anything changes, so a rejected move leaves no trace.
//!
//! 2. **No callbacks**: forming a mill returns `MoveOutcome::MillFormed`; the
//!    driver then calls `Board::perform_removal` until one is accepted.
//!
//! 3. **Seats, not identities**: per-player state lives in `PlayerMap`,
//!    indexed by `PlayerId`.
//!
//! ## Modules
//!
//! - `core`: players, locations, pieces, moves, RNG, configuration
//! - `rules`: the board, stage machine, mill detection, adjacency
//! - `game`: agents and the turn driver
//! - `error`: error types
//!
//! ## Example
//!
//! ```
//! use morris_engine::{Board, Move, MoveOutcome, PlayerId, Stage};
//!
//! let mut board = Board::new(2);
//! let p0 = PlayerId::new(0);
//!
//! let outcome = board.perform_move(Move::place("a1".parse()?), p0)?;
//! assert_eq!(outcome, MoveOutcome::Applied);
//! assert_eq!(board.stage(p0), Stage::Placing);
//! assert_eq!(board.pieces_to_place(p0), 8);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, Location, Move, MoveKind, MoveRecord, Piece, PieceId, PlayerId, PlayerMap};

pub use crate::error::{ConfigError, GameError, IllegalMoveError, InvalidLocationError, MoveParseError};

pub use crate::rules::{Board, MoveOutcome, Stage};

pub use crate::game::{Agent, GameController, GameResult, GameSummary, RandomAgent, ScriptedAgent};
