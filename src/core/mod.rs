//! Core value types: players, locations, pieces, moves, RNG, configuration.
//!
//! Nothing here knows the rules; these are the nouns the rules engine in
//! [`crate::rules`] works with.

pub mod config;
pub mod location;
pub mod moves;
pub mod piece;
pub mod player;
pub mod rng;

pub use config::GameConfig;
pub use location::{is_valid_point, Location, BOARD_SIZE, MIDPOINT, POINT_COUNT, VALID_POINTS};
pub use moves::{Move, MoveKind, MoveRecord};
pub use piece::{Piece, PieceId};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
