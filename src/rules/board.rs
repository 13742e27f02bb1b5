//! The rules engine.
//!
//! `Board` owns the grid, every player's pool, removed count and stage, and
//! the move history. `perform_move` is the only way to change any of it.
//!
//! ## Mill removal
//!
//! Forming a mill does not call back into the driver. `perform_move` returns
//! [`MoveOutcome::MillFormed`] and the board records that the mover owes a
//! removal. Until it is paid with [`Board::perform_removal`] every other move
//! is rejected with [`IllegalMoveError::RemovalPending`]. A removal never opens
//! a second removal.
//!
//! ## Validation order
//!
//! All checks run before anything is touched, so a rejected move leaves the
//! board exactly as it was.

use im::Vector;
use tracing::{debug, trace};

use super::adjacency;
use super::grid::Grid;
use super::mill;
use super::stage::Stage;
use crate::core::{GameConfig, Location, Move, MoveKind, MoveRecord, Piece, PlayerId, PlayerMap};
use crate::error::{ConfigError, IllegalMoveError};

/// What happened when a move was applied.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied and the turn is over.
    Applied,
    /// The moved or placed piece completed a mill. If an opponent has a piece
    /// on the board, `pending_removal()` now names the mover.
    MillFormed,
    /// A piece was removed, settling a pending mill.
    Removed,
}

/// Nine Men's Morris game state and rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    config: GameConfig,
    grid: Grid,
    pools: PlayerMap<Vec<Piece>>,
    removed: PlayerMap<usize>,
    stages: PlayerMap<Stage>,
    history: Vector<MoveRecord>,
    pending_removal: Option<PlayerId>,
}

impl Board {
    /// Create a standard board for `player_count` players, nine pieces each.
    ///
    /// With three or more players the pools hold more pieces than the board
    /// has points; placement then stops at `Occupied` once the grid is full.
    ///
    /// # Panics
    ///
    /// If `player_count` is below 2 or above 255.
    pub fn new(player_count: usize) -> Self {
        Self::build(GameConfig::new(player_count))
    }

    /// Create a board with custom piece counts.
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GameConfig) -> Self {
        let count = config.player_count;
        let pieces = config.pieces_per_player;
        Self {
            pools: PlayerMap::new(count, |p| Piece::pool(p, pieces)),
            removed: PlayerMap::with_value(count, 0),
            stages: PlayerMap::with_value(count, Stage::Placing),
            grid: Grid::new(),
            history: Vector::new(),
            pending_removal: None,
            config,
        }
    }

    // === Queries ===

    /// The counts this board was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the cells.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.stages.player_count()
    }

    /// The player in seat `idx`, if there is one.
    #[must_use]
    pub fn player(&self, idx: usize) -> Option<PlayerId> {
        (idx < self.player_count()).then(|| PlayerId::new(idx as u8))
    }

    /// Every seat, in turn order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> {
        self.stages.player_ids()
    }

    /// The player whose pieces `player` attacks: the next seat.
    #[must_use]
    pub fn opponent(&self, player: PlayerId) -> PlayerId {
        player.next(self.player_count())
    }

    /// Stage of `player`. Unknown players read as `GameOver`.
    #[must_use]
    pub fn stage(&self, player: PlayerId) -> Stage {
        self.stages.get(player).copied().unwrap_or(Stage::GameOver)
    }

    /// True once any player has reached `GameOver`.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.stages.iter().any(|(_, &stage)| stage == Stage::GameOver)
    }

    /// The first player not in `GameOver`, once the game is over.
    ///
    /// Meant for two players. With more seats it still returns the first
    /// survivor rather than deciding between several.
    #[must_use]
    pub fn winning_player(&self) -> Option<PlayerId> {
        if !self.is_game_over() {
            return None;
        }
        self.stages
            .iter()
            .find(|(_, &stage)| stage != Stage::GameOver)
            .map(|(player, _)| player)
    }

    /// Piece at raw grid coordinates.
    #[must_use]
    pub fn piece_at(&self, x: usize, y: usize) -> Option<Piece> {
        self.grid.get(x, y)
    }

    #[must_use]
    pub fn piece_at_location(&self, location: Location) -> Option<Piece> {
        self.grid.at(location)
    }

    /// Pieces `player` has not placed yet.
    #[must_use]
    pub fn pieces_to_place(&self, player: PlayerId) -> usize {
        self.pools.get(player).map_or(0, Vec::len)
    }

    #[must_use]
    pub fn pieces_on_board(&self, player: PlayerId) -> usize {
        self.grid.count_owned(player)
    }

    /// Pieces of `player` taken off the board by opponents.
    #[must_use]
    pub fn pieces_removed(&self, player: PlayerId) -> usize {
        self.removed.get(player).copied().unwrap_or(0)
    }

    /// Pieces of `player` that currently sit in a mill.
    #[must_use]
    pub fn pieces_in_mills(&self, player: PlayerId) -> usize {
        mill::pieces_in_mills(&self.grid, player)
    }

    /// Whether `(x, y)` lies on a line of three of `player`'s pieces.
    #[must_use]
    pub fn is_in_mill(&self, x: usize, y: usize, player: PlayerId) -> bool {
        mill::is_in_mill(&self.grid, x, y, player)
    }

    #[must_use]
    pub fn is_adjacent(&self, a: Location, b: Location) -> bool {
        adjacency::is_adjacent(a, b)
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The player who owes a removal, if any.
    #[must_use]
    pub fn pending_removal(&self) -> Option<PlayerId> {
        self.pending_removal
    }

    /// Locations the pending remover may take a piece from.
    ///
    /// Empty unless `player` owes a removal.
    #[must_use]
    pub fn removable_pieces(&self, player: PlayerId) -> Vec<Location> {
        if self.pending_removal != Some(player) {
            return Vec::new();
        }
        self.removal_targets(player)
    }

    /// Every move `perform_move` would accept from `player` right now.
    #[must_use]
    pub fn legal_moves(&self, player: PlayerId) -> Vec<Move> {
        if self.check_protocol(None, player).is_err() {
            return Vec::new();
        }
        if self.pending_removal.is_some() {
            return self
                .removable_pieces(player)
                .into_iter()
                .map(Move::remove)
                .collect();
        }

        let candidates: Vec<Move> = match self.stage(player) {
            Stage::Placing => self.grid.empty().map(Move::place).collect(),
            Stage::Moving => self
                .own_pieces(player)
                .flat_map(|from| {
                    adjacency::neighbors(from)
                        .into_iter()
                        .map(move |to| Move::relocate(from, to))
                })
                .collect(),
            Stage::Flying => self
                .own_pieces(player)
                .flat_map(|from| self.grid.empty().map(move |to| Move::relocate(from, to)))
                .collect(),
            Stage::GameOver => Vec::new(),
        };

        candidates
            .into_iter()
            .filter(|mv| self.validate(mv, player).is_ok())
            .collect()
    }

    fn own_pieces(&self, player: PlayerId) -> impl Iterator<Item = Location> + '_ {
        self.grid
            .occupied()
            .filter(move |(_, piece)| piece.owner == player)
            .map(|(loc, _)| loc)
    }

    /// Opponent pieces `player` may take: unprotected ones, or any when the
    /// owner has nothing but mills left.
    fn removal_targets(&self, player: PlayerId) -> Vec<Location> {
        self.grid
            .occupied()
            .filter(|(loc, piece)| piece.owner != player && !self.is_protected(*loc, piece.owner))
            .map(|(loc, _)| loc)
            .collect()
    }

    fn has_unprotected_piece(&self, owner: PlayerId) -> bool {
        self.pieces_on_board(owner) > self.pieces_in_mills(owner)
    }

    fn is_protected(&self, location: Location, owner: PlayerId) -> bool {
        self.is_in_mill(location.x(), location.y(), owner) && self.has_unprotected_piece(owner)
    }

    // === Validation ===

    /// Player, game-over and removal-protocol checks. `kind` is `None` when
    /// only the player's right to act is being asked about.
    fn check_protocol(&self, kind: Option<MoveKind>, player: PlayerId) -> Result<(), IllegalMoveError> {
        if !self.stages.contains(player) {
            return Err(IllegalMoveError::UnknownPlayer(player));
        }
        if self.is_game_over() {
            return Err(IllegalMoveError::GameOver);
        }
        match (kind, self.pending_removal) {
            (Some(MoveKind::Remove), None) => Err(IllegalMoveError::NoRemovalPending),
            (_, Some(owed_by)) if owed_by != player => Err(IllegalMoveError::WrongRemover(owed_by)),
            (Some(MoveKind::Place | MoveKind::Relocate), Some(_)) => {
                Err(IllegalMoveError::RemovalPending)
            }
            _ => Ok(()),
        }
    }

    /// Run every check for `mv` without touching the board.
    fn validate(&self, mv: &Move, player: PlayerId) -> Result<MoveKind, IllegalMoveError> {
        let kind = mv.kind().ok_or(IllegalMoveError::EmptyMove)?;
        self.check_protocol(Some(kind), player)?;

        if let Some(to) = mv.to {
            if self.grid.at(to).is_some() {
                return Err(IllegalMoveError::Occupied);
            }
        }

        if mv.from.is_some() && mv.from == mv.to {
            return Err(IllegalMoveError::MustMove);
        }

        match (mv.from, mv.to) {
            (Some(from), None) => {
                let piece = self.grid.at(from).ok_or(IllegalMoveError::NoPieceAtSource)?;
                if piece.owner == player {
                    return Err(IllegalMoveError::RemoveOwnPiece);
                }
                if self.is_protected(from, piece.owner) {
                    return Err(IllegalMoveError::RemoveMilledPiece);
                }
            }
            (Some(from), Some(to)) => {
                let piece = self.grid.at(from).ok_or(IllegalMoveError::NoPieceAtSource)?;
                if piece.owner != player {
                    return Err(IllegalMoveError::MoveOpponentPiece);
                }
                match self.stage(player) {
                    Stage::Placing => return Err(IllegalMoveError::MustPlaceFirst),
                    Stage::Moving if !adjacency::is_adjacent(from, to) => {
                        return Err(IllegalMoveError::FlyingNotAllowed);
                    }
                    _ => {}
                }
            }
            (None, Some(_)) => {
                if self.pieces_to_place(player) == 0 {
                    return Err(IllegalMoveError::NoPiecesToPlace);
                }
            }
            (None, None) => return Err(IllegalMoveError::EmptyMove),
        }

        Ok(kind)
    }

    // === Mutation ===

    /// Validate and apply `mv` for `player`.
    ///
    /// On error nothing changes.
    pub fn perform_move(&mut self, mv: Move, player: PlayerId) -> Result<MoveOutcome, IllegalMoveError> {
        let kind = self.validate(&mv, player).map_err(|err| {
            trace!(%player, %mv, %err, "move rejected");
            err
        })?;

        let piece = match mv.from {
            Some(from) => self.grid.take(from),
            None => self.pools[player].pop(),
        }
        .ok_or(IllegalMoveError::NoPieceAtSource)?;

        if let Some(to) = mv.to {
            self.grid.put(to, piece);
        } else {
            self.removed[piece.owner] += 1;
        }

        let sequence = self.history.len() as u32;
        self.history.push_back(MoveRecord::new(player, mv, sequence));
        self.recalculate_stage(player);

        if kind == MoveKind::Remove {
            self.pending_removal = None;
            self.recalculate_stage(piece.owner);
            debug!(%player, %mv, victim = %piece.owner, "piece removed");
            return Ok(MoveOutcome::Removed);
        }

        let Some(to) = mv.to else {
            return Ok(MoveOutcome::Applied);
        };
        if !self.is_in_mill(to.x(), to.y(), player) {
            debug!(%player, %mv, "move applied");
            return Ok(MoveOutcome::Applied);
        }

        if self.removal_targets(player).is_empty() {
            debug!(%player, %mv, "mill formed, nothing to remove");
        } else {
            self.pending_removal = Some(player);
            debug!(%player, %mv, "mill formed, removal pending");
        }
        Ok(MoveOutcome::MillFormed)
    }

    /// Settle a pending mill by taking the piece at `location`.
    pub fn perform_removal(&mut self, location: Location, player: PlayerId) -> Result<MoveOutcome, IllegalMoveError> {
        self.perform_move(Move::remove(location), player)
    }

    fn recalculate_stage(&mut self, player: PlayerId) {
        let current = self.stages[player];
        let next = current.advance(
            self.pieces_to_place(player),
            self.pieces_on_board(player),
            &self.config,
        );
        if next != current {
            debug!(%player, from = %current, to = %next, "stage changed");
            self.stages[player] = next;
        }
    }
}
