//! The 7×7 cell grid.
//!
//! Only cells marked in [`VALID_POINTS`] ever hold a piece; every write goes
//! through a [`Location`], which is valid by construction.

use crate::core::{Location, Piece, PlayerId, BOARD_SIZE, VALID_POINTS};

/// Cell storage indexed `[y][x]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    /// An empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Piece at raw coordinates. `None` for empty or off-board cells.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<Piece> {
        self.cells.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    /// Piece on `location`, if any.
    #[must_use]
    pub fn at(&self, location: Location) -> Option<Piece> {
        self.cells[location.y()][location.x()]
    }

    /// Set `piece` on `location`, replacing whatever was there.
    pub fn put(&mut self, location: Location, piece: Piece) {
        self.cells[location.y()][location.x()] = Some(piece);
    }

    /// Lift the piece off `location`.
    pub fn take(&mut self, location: Location) -> Option<Piece> {
        self.cells[location.y()][location.x()].take()
    }

    /// Whether `player` owns the piece at `(x, y)`.
    #[must_use]
    pub fn owned_by(&self, x: usize, y: usize, player: PlayerId) -> bool {
        self.get(x, y).is_some_and(|piece| piece.owner == player)
    }

    /// Occupied intersections and their pieces.
    pub fn occupied(&self) -> impl Iterator<Item = (Location, Piece)> + '_ {
        Location::all().filter_map(|loc| self.at(loc).map(|piece| (loc, piece)))
    }

    /// Empty intersections.
    pub fn empty(&self) -> impl Iterator<Item = Location> + '_ {
        Location::all().filter(|&loc| self.at(loc).is_none())
    }

    /// Number of `player`'s pieces on the grid.
    #[must_use]
    pub fn count_owned(&self, player: PlayerId) -> usize {
        self.occupied().filter(|(_, piece)| piece.owner == player).count()
    }

    /// Sanity check used by tests: nothing sits on a non-intersection.
    #[must_use]
    pub fn respects_mask(&self) -> bool {
        self.cells.iter().enumerate().all(|(y, row)| {
            row.iter()
                .enumerate()
                .all(|(x, cell)| cell.is_none() || VALID_POINTS[y][x])
        })
    }
}
