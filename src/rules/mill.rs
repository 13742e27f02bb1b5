//! Mill detection.
//!
//! A mill is three of one player's pieces on one line. Every row and column
//! of the grid holds exactly three intersections, except the midpoint row and
//! column: each holds six, split into two arms of three by the centre. The
//! arms are separate lines, so a mill never spans the centre.

use std::ops::Range;

use super::grid::Grid;
use crate::core::{is_valid_point, PlayerId, BOARD_SIZE, MIDPOINT};

/// Pieces in a mill line.
pub const MILL_LENGTH: usize = 3;

/// The part of a row or column that forms a single line through `index`.
fn line_span(line: usize, index: usize) -> Range<usize> {
    if line != MIDPOINT {
        0..BOARD_SIZE
    } else if index < MIDPOINT {
        0..MIDPOINT
    } else {
        MIDPOINT..BOARD_SIZE
    }
}

fn count_in_row(grid: &Grid, y: usize, player: PlayerId, span: Range<usize>) -> usize {
    span.filter(|&x| is_valid_point(x, y) && grid.owned_by(x, y, player))
        .count()
}

fn count_in_col(grid: &Grid, x: usize, player: PlayerId, span: Range<usize>) -> usize {
    span.filter(|&y| is_valid_point(x, y) && grid.owned_by(x, y, player))
        .count()
}

/// Whether `(x, y)` lies on a line holding three of `player`'s pieces.
///
/// The cell itself is not required to be occupied; callers pass the cell a
/// piece just arrived on, or a cell whose owner they already know.
#[must_use]
pub fn is_in_mill(grid: &Grid, x: usize, y: usize, player: PlayerId) -> bool {
    count_in_row(grid, y, player, line_span(y, x)) == MILL_LENGTH
        || count_in_col(grid, x, player, line_span(x, y)) == MILL_LENGTH
}

/// Number of `player`'s pieces currently part of a mill. Recomputed on every
/// call; the board is 24 cells.
#[must_use]
pub fn pieces_in_mills(grid: &Grid, player: PlayerId) -> usize {
    grid.occupied()
        .filter(|(loc, piece)| piece.owner == player && is_in_mill(grid, loc.x(), loc.y(), player))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Location, Piece, PieceId};

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    fn grid_with(pieces: &[(&str, PlayerId)]) -> Grid {
        let mut grid = Grid::new();
        for (i, (text, owner)) in pieces.iter().enumerate() {
            let loc: Location = text.parse().unwrap();
            grid.put(loc, Piece::new(PieceId(i as u16), *owner));
        }
        grid
    }

    fn in_mill(grid: &Grid, text: &str, player: PlayerId) -> bool {
        let loc: Location = text.parse().unwrap();
        is_in_mill(grid, loc.x(), loc.y(), player)
    }

    #[test]
    fn test_outer_row_mill() {
        let grid = grid_with(&[("a1", P0), ("d1", P0), ("g1", P0)]);
        assert!(in_mill(&grid, "d1", P0));
        assert!(in_mill(&grid, "a1", P0));
        assert!(!in_mill(&grid, "d1", P1));
    }

    #[test]
    fn test_column_mill() {
        let grid = grid_with(&[("b2", P0), ("b4", P0), ("b6", P0)]);
        assert!(in_mill(&grid, "b4", P0));
    }

    #[test]
    fn test_two_pieces_is_not_a_mill() {
        let grid = grid_with(&[("a1", P0), ("d1", P0), ("g1", P1)]);
        assert!(!in_mill(&grid, "a1", P0));
    }

    #[test]
    fn test_midpoint_row_arms_are_separate() {
        // c4 and e4 sit either side of the centre; with b4 that is not a line.
        let grid = grid_with(&[("b4", P0), ("c4", P0), ("e4", P0)]);
        assert!(!in_mill(&grid, "c4", P0));
        assert!(!in_mill(&grid, "e4", P0));

        let grid = grid_with(&[("e4", P0), ("f4", P0), ("g4", P0)]);
        assert!(in_mill(&grid, "e4", P0));
        assert!(in_mill(&grid, "g4", P0));
    }

    #[test]
    fn test_midpoint_column_arms_are_separate() {
        let grid = grid_with(&[("d2", P0), ("d3", P0), ("d5", P0)]);
        assert!(!in_mill(&grid, "d3", P0));
        assert!(!in_mill(&grid, "d5", P0));

        let grid = grid_with(&[("d1", P0), ("d2", P0), ("d3", P0)]);
        assert!(in_mill(&grid, "d1", P0));
    }

    #[test]
    fn test_left_arm_mill() {
        let grid = grid_with(&[("a4", P1), ("b4", P1), ("c4", P1), ("e4", P0)]);
        assert!(in_mill(&grid, "c4", P1));
        assert!(!in_mill(&grid, "e4", P0));
    }

    #[test]
    fn test_pieces_in_mills_counts_shared_corner_once() {
        // Two mills sharing a1: five pieces, all milled.
        let grid = grid_with(&[
            ("a1", P0),
            ("d1", P0),
            ("g1", P0),
            ("a4", P0),
            ("a7", P0),
            ("e5", P0),
        ]);
        assert_eq!(pieces_in_mills(&grid, P0), 5);
        assert_eq!(pieces_in_mills(&grid, P1), 0);
    }
}
