//! Turn driver.
//!
//! Alternates seats, asks each seat's agent for a move and re-asks on illegal
//! moves. After a mill it keeps asking the same agent for a removal until one
//! is accepted. No I/O happens here; front ends wrap an `Agent`.

use tracing::debug;

use super::agent::Agent;
use crate::core::{Location, PlayerId};
use crate::error::{GameError, IllegalMoveError};
use crate::rules::{Board, MoveOutcome};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Turn limit reached with no winner.
    Draw,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// How a game played by [`GameController::play`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub result: GameResult,
    /// Completed turns (a mill and its removal count as one turn).
    pub turns: u32,
}

/// Drives a [`Board`] with one [`Agent`] per seat.
#[derive(Clone, Debug)]
pub struct GameController {
    board: Board,
    current: PlayerId,
    turns: u32,
    max_turns: u32,
    max_attempts: u32,
    blocked: Option<PlayerId>,
}

impl GameController {
    /// Seat 0 moves first. Defaults: no turn limit, 3 attempts per move.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            current: PlayerId::new(0),
            turns: 0,
            max_turns: 0,
            max_attempts: 3,
            blocked: None,
        }
    }

    /// Stop with a draw after this many turns (0 = unlimited).
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Illegal moves tolerated per request before giving up.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// The result, once the game has ended.
    ///
    /// A player left without a legal move loses to the next seat.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.board.is_game_over() {
            return self.board.winning_player().map(GameResult::Winner);
        }
        if let Some(player) = self.blocked {
            return Some(GameResult::Winner(self.board.opponent(player)));
        }
        if self.max_turns > 0 && self.turns >= self.max_turns {
            return Some(GameResult::Draw);
        }
        None
    }

    /// Play the current seat's turn with `agent`.
    ///
    /// Returns the result if the game is over afterwards.
    pub fn play_turn<A: Agent + ?Sized>(&mut self, agent: &mut A) -> Result<Option<GameResult>, GameError> {
        if let Some(result) = self.result() {
            return Ok(Some(result));
        }

        let player = self.current;
        if self.board.legal_moves(player).is_empty() {
            debug!(%player, "no legal moves");
            self.blocked = Some(player);
            return Ok(self.result());
        }

        let outcome = self.attempt(player, |board| agent.choose_move(board, player), Board::perform_move)?;

        if outcome == MoveOutcome::MillFormed {
            while self.board.pending_removal() == Some(player) {
                let _removed = self.attempt(
                    player,
                    |board| agent.choose_removal(board, player),
                    |board: &mut Board, loc: Location, p| board.perform_removal(loc, p),
                )?;
            }
        }

        self.turns += 1;
        self.current = self.board.opponent(player);
        Ok(self.result())
    }

    /// Play to the end. `agents[i]` moves for seat `i`.
    pub fn play(&mut self, agents: &mut [&mut dyn Agent]) -> Result<GameSummary, GameError> {
        let expected = self.board.player_count();
        if agents.len() != expected {
            return Err(GameError::AgentCount {
                expected,
                got: agents.len(),
            });
        }

        loop {
            let seat = self.current.index();
            if let Some(result) = self.play_turn(&mut *agents[seat])? {
                debug!(?result, turns = self.turns, "game finished");
                return Ok(GameSummary {
                    result,
                    turns: self.turns,
                });
            }
        }
    }

    /// Ask for choices until the board accepts one.
    fn attempt<T>(
        &mut self,
        player: PlayerId,
        mut choose: impl FnMut(&Board) -> Option<T>,
        apply: impl Fn(&mut Board, T, PlayerId) -> Result<MoveOutcome, IllegalMoveError>,
    ) -> Result<MoveOutcome, GameError> {
        let mut attempts = 0;
        loop {
            let choice = choose(&self.board).ok_or(GameError::AgentExhausted(player))?;
            match apply(&mut self.board, choice, player) {
                Ok(outcome) => return Ok(outcome),
                Err(err) => {
                    attempts += 1;
                    debug!(%player, %err, attempts, "illegal move");
                    if attempts >= self.max_attempts {
                        return Err(GameError::TooManyIllegalMoves { player, source: err });
                    }
                }
            }
        }
    }
}
