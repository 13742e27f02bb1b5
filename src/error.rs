//! Error types for location parsing, move validation, configuration and the
//! turn driver.
//!
//! Every error here is recoverable: a rejected move leaves the board exactly
//! as it was, so the caller can simply ask for another one.

use crate::core::PlayerId;

/// A location string or coordinate pair that does not name a point on the
/// board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidLocationError {
    #[error("invalid location: expected 2 characters, got {0}")]
    WrongLength(usize),

    #[error("invalid location: column '{0}' is outside a-g")]
    ColumnOutOfRange(char),

    #[error("invalid location: row '{0}' is outside 1-7")]
    RowOutOfRange(char),

    #[error("invalid location: ({x}, {y}) is not an intersection")]
    NotAnIntersection { x: usize, y: usize },
}

/// A move the rules engine refused to apply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMoveError {
    #[error("Board location is occupied")]
    Occupied,

    #[error("There is no piece at the specified location")]
    NoPieceAtSource,

    #[error("Can't remove your own piece")]
    RemoveOwnPiece,

    #[error("Can't remove a piece which is part of a mill")]
    RemoveMilledPiece,

    #[error("Can't move another player's piece")]
    MoveOpponentPiece,

    #[error("Must move a piece")]
    MustMove,

    #[error("Flying is not allowed yet")]
    FlyingNotAllowed,

    #[error("Move has neither a source nor a destination")]
    EmptyMove,

    #[error("A piece must be removed before the game can continue")]
    RemovalPending,

    #[error("No mill was formed, so no piece may be removed")]
    NoRemovalPending,

    #[error("Only {0} may remove a piece")]
    WrongRemover(PlayerId),

    #[error("Pieces must all be placed before they can be moved")]
    MustPlaceFirst,

    #[error("No pieces left to place")]
    NoPiecesToPlace,

    #[error("The game is over")]
    GameOver,

    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),
}

/// Failure to parse the text form of a move ("d1", "a1-a4", "xa4").
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    #[error("empty move")]
    Empty,

    #[error("bad location in move: {0}")]
    Location(#[from] InvalidLocationError),
}

/// Errors that can occur when validating a [`GameConfig`](crate::core::GameConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors raised by the turn driver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("expected {expected} agents, got {got}")]
    AgentCount { expected: usize, got: usize },

    #[error("{0} has no more moves to offer")]
    AgentExhausted(PlayerId),

    #[error("{player} made too many illegal moves (last: {source})")]
    TooManyIllegalMoves {
        player: PlayerId,
        source: IllegalMoveError,
    },
}
