//! Agents: whoever decides the moves for a seat.
//!
//! The engine never asks for input itself. A driver asks an `Agent` for a
//! move, and after a mill, for a piece to remove. Interactive front ends
//! implement this trait outside the crate; two non-interactive agents live
//! here.

use std::collections::VecDeque;

use tracing::trace;

use crate::core::{GameRng, Location, Move, PlayerId};
use crate::error::MoveParseError;
use crate::rules::Board;

/// Source of moves for one seat.
pub trait Agent {
    /// Next move for `player`. `None` when the agent has nothing to offer.
    fn choose_move(&mut self, board: &Board, player: PlayerId) -> Option<Move>;

    /// Opponent piece to take after `player` formed a mill.
    fn choose_removal(&mut self, board: &Board, player: PlayerId) -> Option<Location>;
}

/// Replays a fixed script of moves in text form.
///
/// Removal entries (`xa4`) answer `choose_removal`; everything else answers
/// `choose_move`. An entry of the wrong kind is left in place and the agent
/// reports `None`.
///
/// ```
/// use morris_engine::game::ScriptedAgent;
///
/// let agent = ScriptedAgent::parse(&["d3", "d2", "d1", "xg7"]).unwrap();
/// assert_eq!(agent.remaining(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedAgent {
    script: VecDeque<Move>,
}

impl ScriptedAgent {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            script: moves.into_iter().collect(),
        }
    }

    /// Build from text moves, failing on the first malformed one.
    pub fn parse(moves: &[&str]) -> Result<Self, MoveParseError> {
        let script = moves
            .iter()
            .map(|text| text.parse())
            .collect::<Result<VecDeque<Move>, _>>()?;
        Ok(Self { script })
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Agent for ScriptedAgent {
    fn choose_move(&mut self, _board: &Board, _player: PlayerId) -> Option<Move> {
        match self.script.front() {
            Some(mv) if mv.to.is_some() => self.script.pop_front(),
            _ => None,
        }
    }

    fn choose_removal(&mut self, _board: &Board, _player: PlayerId) -> Option<Location> {
        match self.script.front() {
            Some(Move { from: Some(from), to: None }) => {
                let from = *from;
                self.script.pop_front();
                Some(from)
            }
            _ => None,
        }
    }
}

/// Picks uniformly among the legal moves.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        trace!(seed = rng.seed(), "random agent seeded");
        Self { rng }
    }

    /// One agent per seat, each on its own stream forked from `seed`.
    #[must_use]
    pub fn seats(seed: u64, player_count: usize) -> Vec<Self> {
        let mut root = GameRng::new(seed);
        (0..player_count).map(|_| Self::from_rng(root.fork())).collect()
    }
}

impl Agent for RandomAgent {
    fn choose_move(&mut self, board: &Board, player: PlayerId) -> Option<Move> {
        let moves = board.legal_moves(player);
        self.rng.choose(&moves).copied()
    }

    fn choose_removal(&mut self, board: &Board, player: PlayerId) -> Option<Location> {
        let targets = board.removable_pieces(player);
        self.rng.choose(&targets).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: PlayerId = PlayerId::new(0);

    #[test]
    fn test_scripted_agent_splits_moves_and_removals() {
        let board = Board::new(2);
        let mut agent = ScriptedAgent::parse(&["a1", "xg7", "a1-a4"]).unwrap();

        assert_eq!(agent.choose_move(&board, P0), Some("a1".parse().unwrap()));
        // Next entry is a removal; it is not handed out as a move.
        assert_eq!(agent.choose_move(&board, P0), None);
        assert_eq!(agent.choose_removal(&board, P0), Some("g7".parse().unwrap()));
        assert_eq!(agent.choose_removal(&board, P0), None);
        assert_eq!(agent.choose_move(&board, P0), Some("a1-a4".parse().unwrap()));
        assert_eq!(agent.remaining(), 0);
        assert_eq!(agent.choose_move(&board, P0), None);
    }

    #[test]
    fn test_scripted_agent_parse_error() {
        assert!(ScriptedAgent::parse(&["a1", "d4"]).is_err());
    }

    #[test]
    fn test_random_agent_only_offers_legal_moves() {
        let board = Board::new(2);
        let mut agent = RandomAgent::new(3);
        for _ in 0..20 {
            let mv = agent.choose_move(&board, P0).unwrap();
            assert!(board.legal_moves(P0).contains(&mv));
        }
        assert_eq!(agent.choose_removal(&board, P0), None);
    }

    #[test]
    fn test_seats_get_distinct_streams() {
        let seats = RandomAgent::seats(5, 3);
        assert_eq!(seats.len(), 3);
        assert_ne!(seats[0].rng.seed(), seats[1].rng.seed());
        assert_ne!(seats[1].rng.seed(), seats[2].rng.seed());

        let again = RandomAgent::seats(5, 3);
        let seeds: Vec<u64> = seats.iter().map(|a| a.rng.seed()).collect();
        let seeds_again: Vec<u64> = again.iter().map(|a| a.rng.seed()).collect();
        assert_eq!(seeds, seeds_again);
    }

    #[test]
    fn test_random_agent_is_deterministic() {
        let board = Board::new(2);
        let mut a = RandomAgent::new(11);
        let mut b = RandomAgent::new(11);
        for _ in 0..10 {
            assert_eq!(a.choose_move(&board, P0), b.choose_move(&board, P0));
        }
    }
}
