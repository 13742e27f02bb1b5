//! Move representation and the append-only history record.
//!
//! A move is a pair of optional locations:
//! - placement: no `from`, a `to`
//! - relocation: both (sliding or flying)
//! - removal: a `from`, no `to` (only right after forming a mill)
//!
//! ## Text form
//!
//! Scripted inputs write moves as `d1` (place), `a1-a4` (relocate) and
//! `xa4` (remove).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::location::Location;
use super::player::PlayerId;
use crate::error::MoveParseError;

/// What a move does to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Place,
    Relocate,
    Remove,
}

/// A requested change to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Option<Location>,
    pub to: Option<Location>,
}

impl Move {
    /// Put a piece from the player's pool on `to`.
    #[must_use]
    pub const fn place(to: Location) -> Self {
        Self {
            from: None,
            to: Some(to),
        }
    }

    /// Move the piece on `from` to `to`.
    #[must_use]
    pub const fn relocate(from: Location, to: Location) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Take the opponent's piece on `from` off the board.
    #[must_use]
    pub const fn remove(from: Location) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    /// Classify the move. `None` when neither location is set.
    #[must_use]
    pub const fn kind(&self) -> Option<MoveKind> {
        match (self.from, self.to) {
            (None, Some(_)) => Some(MoveKind::Place),
            (Some(_), Some(_)) => Some(MoveKind::Relocate),
            (Some(_), None) => Some(MoveKind::Remove),
            (None, None) => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.from, self.to) {
            (None, Some(to)) => write!(f, "{to}"),
            (Some(from), Some(to)) => write!(f, "{from}-{to}"),
            (Some(from), None) => write!(f, "x{from}"),
            (None, None) => write!(f, "-"),
        }
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoveParseError::Empty);
        }

        if let Some(from) = s.strip_prefix('x') {
            return Ok(Move::remove(from.parse()?));
        }

        match s.split_once('-') {
            Some((from, to)) => Ok(Move::relocate(from.parse()?, to.parse()?)),
            None => Ok(Move::place(s.parse()?)),
        }
    }
}

/// An applied move, as kept in the board history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who made the move.
    pub player: PlayerId,

    pub mv: Move,

    /// Position in the history, starting at 0.
    pub sequence: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: PlayerId, mv: Move, sequence: u32) -> Self {
        Self {
            player,
            mv,
            sequence,
        }
    }
}
