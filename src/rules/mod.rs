//! The rules engine.
//!
//! - `board`: game state and `perform_move`, the only mutating entry point
//! - `stage`: the per-player Placing → Moving → Flying → GameOver machine
//! - `mill`: three-in-a-row detection, aware of the split midpoint lines
//! - `adjacency`: one-step neighbours along the board's lines
//! - `grid`: the 7×7 cell storage

pub mod adjacency;
pub mod board;
pub mod grid;
pub mod mill;
pub mod stage;

pub use board::{Board, MoveOutcome};
pub use grid::Grid;
pub use stage::Stage;
