//! Adjacency along the lines of the board.
//!
//! Two points are adjacent when they share a row or column and no other
//! intersection lies between them. The centre cell is not on any line, so a
//! scan that reaches it stops: c4/e4 and d3/d5 are never adjacent.

use smallvec::SmallVec;

use crate::core::{is_valid_point, Location, BOARD_SIZE, MIDPOINT};

const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// First intersection reached from `from` stepping by `(dx, dy)`.
fn first_point_along(from: Location, dx: isize, dy: isize) -> Option<Location> {
    let size = BOARD_SIZE as isize;
    let mid = MIDPOINT as isize;
    let mut x = from.x() as isize + dx;
    let mut y = from.y() as isize + dy;

    while (0..size).contains(&x) && (0..size).contains(&y) {
        if x == mid && y == mid {
            return None;
        }
        if is_valid_point(x as usize, y as usize) {
            return Location::new(x as usize, y as usize).ok();
        }
        x += dx;
        y += dy;
    }
    None
}

/// Points one step away from `location`. Every point has two to four.
#[must_use]
pub fn neighbors(location: Location) -> SmallVec<[Location; 4]> {
    DIRECTIONS
        .iter()
        .filter_map(|&(dx, dy)| first_point_along(location, dx, dy))
        .collect()
}

/// Whether a piece may slide from `a` to `b` in one step.
#[must_use]
pub fn is_adjacent(a: Location, b: Location) -> bool {
    if a.x() != b.x() && a.y() != b.y() {
        return false;
    }
    neighbors(a).contains(&b)
}
