//! Board geometry: the validity mask and the `Location` value type.
//!
//! The board is a 7×7 logical grid of which only 24 cells are intersections:
//! the cells on the midpoint row, the midpoint column and both diagonals,
//! minus the centre itself.
//!
//! ```text
//!  7  a7 ----- d7 ----- g7
//!  6  |  b6 -- d6 -- f6  |
//!  5  |  |  c5-d5-e5  |  |
//!  4  a4-b4-c4     e4-f4-g4
//!  3  |  |  c3-d3-e3  |  |
//!  2  |  b2 -- d2 -- f2  |
//!  1  a1 ----- d1 ----- g1
//!     a  b  c  d  e  f  g
//! ```
//!
//! Locations are written as a column letter followed by a row digit:
//! `(x, y) = (letter - 'a', digit - '1')`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InvalidLocationError;

/// Width and height of the logical grid.
pub const BOARD_SIZE: usize = 7;

/// Index of the midpoint row and column.
pub const MIDPOINT: usize = BOARD_SIZE / 2;

/// Number of intersections on the board.
pub const POINT_COUNT: usize = 24;

const fn build_mask() -> [[bool; BOARD_SIZE]; BOARD_SIZE] {
    let mut mask = [[false; BOARD_SIZE]; BOARD_SIZE];
    let mut y = 0;
    while y < BOARD_SIZE {
        let mut x = 0;
        while x < BOARD_SIZE {
            let on_line = x == MIDPOINT || y == MIDPOINT || x == y || x == BOARD_SIZE - 1 - y;
            mask[y][x] = on_line && !(x == MIDPOINT && y == MIDPOINT);
            x += 1;
        }
        y += 1;
    }
    mask
}

/// Validity mask indexed `[y][x]`. Shared by parsing, mill scans and
/// adjacency scans.
pub const VALID_POINTS: [[bool; BOARD_SIZE]; BOARD_SIZE] = build_mask();

/// Whether `(x, y)` is an intersection. Out-of-range coordinates are not.
#[must_use]
pub const fn is_valid_point(x: usize, y: usize) -> bool {
    x < BOARD_SIZE && y < BOARD_SIZE && VALID_POINTS[y][x]
}

/// A validated point on the board.
///
/// A `Location` can only be obtained through [`Location::new`] or parsing, so
/// every value names a real intersection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Location {
    x: u8,
    y: u8,
}

impl Location {
    /// Create a location from grid coordinates.
    pub fn new(x: usize, y: usize) -> Result<Self, InvalidLocationError> {
        if !is_valid_point(x, y) {
            return Err(InvalidLocationError::NotAnIntersection { x, y });
        }
        Ok(Self {
            x: x as u8,
            y: y as u8,
        })
    }

    #[must_use]
    pub const fn x(self) -> usize {
        self.x as usize
    }

    #[must_use]
    pub const fn y(self) -> usize {
        self.y as usize
    }

    /// Iterate over all 24 intersections, bottom row first, left to right.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..BOARD_SIZE)
            .flat_map(|y| (0..BOARD_SIZE).map(move |x| (x, y)))
            .filter(|&(x, y)| is_valid_point(x, y))
            .map(|(x, y)| Location {
                x: x as u8,
                y: y as u8,
            })
    }
}

impl FromStr for Location {
    type Err = InvalidLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(column), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(InvalidLocationError::WrongLength(s.chars().count()));
        };

        if !('a'..='g').contains(&column) {
            return Err(InvalidLocationError::ColumnOutOfRange(column));
        }
        if !('1'..='7').contains(&row) {
            return Err(InvalidLocationError::RowOutOfRange(row));
        }

        let x = (column as u8 - b'a') as usize;
        let y = (row as u8 - b'1') as usize;
        Self::new(x, y)
    }
}

impl TryFrom<String> for Location {
    type Error = InvalidLocationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.to_string()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.x) as char, (b'1' + self.y) as char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_has_24_points() {
        let count = VALID_POINTS.iter().flatten().filter(|&&v| v).count();
        assert_eq!(count, POINT_COUNT);
        assert_eq!(Location::all().count(), POINT_COUNT);
    }

    #[test]
    fn test_mask_rows() {
        assert_eq!(VALID_POINTS[0], [true, false, false, true, false, false, true]);
        assert_eq!(VALID_POINTS[2], [false, false, true, true, true, false, false]);
        assert_eq!(VALID_POINTS[3], [true, true, true, false, true, true, true]);
        assert_eq!(VALID_POINTS[5], [false, true, false, true, false, true, false]);
    }

    #[test]
    fn test_parse_valid() {
        let loc: Location = "d7".parse().unwrap();
        assert_eq!((loc.x(), loc.y()), (3, 6));

        let loc: Location = "a1".parse().unwrap();
        assert_eq!((loc.x(), loc.y()), (0, 0));
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(
            "abc123".parse::<Location>(),
            Err(InvalidLocationError::WrongLength(6))
        );
        assert_eq!("".parse::<Location>(), Err(InvalidLocationError::WrongLength(0)));
    }

    #[test]
    fn test_parse_reversed() {
        assert_eq!(
            "7g".parse::<Location>(),
            Err(InvalidLocationError::ColumnOutOfRange('7'))
        );
    }

    #[test]
    fn test_parse_out_of_bounds() {
        assert_eq!(
            "h9".parse::<Location>(),
            Err(InvalidLocationError::ColumnOutOfRange('h'))
        );
        assert_eq!(
            "a8".parse::<Location>(),
            Err(InvalidLocationError::RowOutOfRange('8'))
        );
    }

    #[test]
    fn test_parse_non_intersection() {
        assert_eq!(
            "a2".parse::<Location>(),
            Err(InvalidLocationError::NotAnIntersection { x: 0, y: 1 })
        );
        assert_eq!(
            "d4".parse::<Location>(),
            Err(InvalidLocationError::NotAnIntersection { x: 3, y: 3 })
        );
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Location::new(7, 0).is_err());
        assert!(Location::new(0, 7).is_err());
        assert!(Location::new(6, 6).is_ok());
    }

    #[test]
    fn test_display_matches_parse() {
        for loc in Location::all() {
            let text = loc.to_string();
            assert_eq!(text.len(), 2);
            assert_eq!(text.parse::<Location>(), Ok(loc));
        }
    }

    #[test]
    fn test_serde_uses_text_form() {
        let loc: Location = "g4".parse().unwrap();
        assert_eq!(serde_json::to_string(&loc).unwrap(), "\"g4\"");
        assert!(serde_json::from_str::<Location>("\"d4\"").is_err());
    }
}
