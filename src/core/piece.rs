//! Pieces and their identities.

use super::player::PlayerId;

/// Stable identity of a piece, unique across all players of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub u16);

/// A single piece. Its owner never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub id: PieceId,
    pub owner: PlayerId,
}

impl Piece {
    #[must_use]
    pub const fn new(id: PieceId, owner: PlayerId) -> Self {
        Self { id, owner }
    }

    /// Build the starting pool for `owner`.
    ///
    /// The pool is consumed from the back, so the lowest id comes out first.
    #[must_use]
    pub fn pool(owner: PlayerId, count: usize) -> Vec<Piece> {
        let base = owner.index() * count;
        (0..count)
            .rev()
            .map(|i| Piece::new(PieceId((base + i) as u16), owner))
            .collect()
    }
}
