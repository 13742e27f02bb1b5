//! Game configuration.
//!
//! The board geometry is fixed; what can be tuned are the piece counts that
//! drive the stage machine. `GameConfig::default()` is standard Nine Men's
//! Morris for two players.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Counts that drive pools and stage transitions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (at least 2).
    pub player_count: usize,

    /// Pieces each player starts with in their pool.
    pub pieces_per_player: usize,

    /// A moving player starts flying once they have this many pieces or
    /// fewer on the board.
    pub fly_at: usize,

    /// A flying player loses once they have fewer than this many pieces on
    /// the board.
    pub min_pieces: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            pieces_per_player: 9,
            fly_at: 3,
            min_pieces: 3,
        }
    }
}

impl GameConfig {
    /// Standard counts for `player_count` players.
    pub fn new(player_count: usize) -> Self {
        assert!(player_count >= 2, "Must have at least 2 players");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Set the number of pieces per player.
    #[must_use]
    pub fn with_pieces_per_player(mut self, pieces: usize) -> Self {
        self.pieces_per_player = pieces;
        self
    }

    /// Set the piece count at which flying begins.
    #[must_use]
    pub fn with_fly_at(mut self, fly_at: usize) -> Self {
        self.fly_at = fly_at;
        self
    }

    /// Set the piece count below which a player loses.
    #[must_use]
    pub fn with_min_pieces(mut self, min_pieces: usize) -> Self {
        self.min_pieces = min_pieces;
        self
    }

    /// Check that the counts describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=255).contains(&self.player_count) {
            return Err(ConfigError::Validation(format!(
                "player_count must be 2-255, got {}",
                self.player_count
            )));
        }
        if self.min_pieces == 0 {
            return Err(ConfigError::Validation("min_pieces must be > 0".to_string()));
        }
        if self.fly_at < self.min_pieces {
            return Err(ConfigError::Validation(format!(
                "fly_at ({}) must be >= min_pieces ({})",
                self.fly_at, self.min_pieces
            )));
        }
        if self.pieces_per_player <= self.fly_at {
            return Err(ConfigError::Validation(format!(
                "pieces_per_player ({}) must be > fly_at ({})",
                self.pieces_per_player, self.fly_at
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard() {
        let config = GameConfig::default();
        assert_eq!(config.player_count, 2);
        assert_eq!(config.pieces_per_player, 9);
        assert_eq!(config.fly_at, 3);
        assert_eq!(config.min_pieces, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(2).with_pieces_per_player(6).with_fly_at(4);
        assert_eq!(config.pieces_per_player, 6);
        assert_eq!(config.fly_at, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_pools_may_exceed_the_board() {
        // Three players hold 27 pieces for 24 points; placement simply runs
        // out of empty points.
        let config = GameConfig::new(3);
        assert_eq!(config.pieces_per_player, 9);
        assert!(config.validate().is_ok());
        assert!(GameConfig::new(4).with_pieces_per_player(12).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_thresholds() {
        let config = GameConfig::default().with_fly_at(2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_min_pieces_bounds() {
        assert!(GameConfig::default().with_min_pieces(0).validate().is_err());
        assert!(GameConfig::default().with_min_pieces(4).validate().is_err());
        assert!(GameConfig::default().with_fly_at(4).with_min_pieces(4).validate().is_ok());
    }

    #[test]
    fn test_serde() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    #[should_panic(expected = "Must have at least 2 players")]
    fn test_one_player() {
        GameConfig::new(1);
    }
}
