//! Per-player stage machine.
//!
//! ```text
//! Placing --(pool empty)--> Moving --(on board <= fly_at)--> Flying --(on board < min_pieces)--> GameOver
//! ```
//!
//! Stages only move forward. The next stage is a pure function of the
//! player's piece counts.

use std::fmt;

use crate::core::GameConfig;

/// Where a player is in the game. Ordered by progression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Pieces remain in the pool; every move is a placement.
    Placing,
    /// Pieces slide along lines to adjacent points.
    Moving,
    /// Pieces may jump to any empty point.
    Flying,
    /// Too few pieces left. This player has lost.
    GameOver,
}

impl Stage {
    /// Advance as far as the counts allow.
    ///
    /// Several transitions can happen at once, e.g. a player who places
    /// their last piece with only three on the board goes straight to
    /// `Flying`.
    #[must_use]
    pub fn advance(self, in_pool: usize, on_board: usize, config: &GameConfig) -> Stage {
        let mut stage = self;
        loop {
            let next = match stage {
                Stage::Placing if in_pool == 0 => Stage::Moving,
                Stage::Moving if on_board <= config.fly_at => Stage::Flying,
                Stage::Flying if on_board < config.min_pieces => Stage::GameOver,
                _ => return stage,
            };
            stage = next;
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Placing => "placing",
            Stage::Moving => "moving",
            Stage::Flying => "flying",
            Stage::GameOver => "game over",
        };
        f.write_str(name)
    }
}
