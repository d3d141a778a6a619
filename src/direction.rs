//! Direction labels for moves between adjacent grid cells.
//!
//! Every move is one of the eight Moore-neighborhood offsets, each tagged with a
//! single-letter label. The diagonal labels are the four straight directions
//! rotated 45 degrees anticlockwise, so `North` points up-left rather than up.
//!
//! | label | name    | (dx, dy)  |
//! |-------|---------|-----------|
//! | `U`   | `Up`    | ( 0, +1)  |
//! | `D`   | `Down`  | ( 0, -1)  |
//! | `L`   | `Left`  | (-1,  0)  |
//! | `R`   | `Right` | (+1,  0)  |
//! | `N`   | `North` | (-1, +1)  |
//! | `S`   | `South` | (+1, -1)  |
//! | `E`   | `East`  | (+1, +1)  |
//! | `W`   | `West`  | (-1, -1)  |
//!
//! `Source` (`X`) only tags the first cell of a search; it is never part of a path.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    North,
    South,
    East,
    West,
    /// The origin of a search. Has no offset.
    Source,
}

impl Direction {
    /// The order in which neighbors are explored from every cell.
    ///
    /// Which path gets recorded for a word reachable several ways depends on this
    /// order, so it must never change between runs.
    pub const SEARCH_ORDER: [Direction; 8] = [
        Direction::Up,
        Direction::East,
        Direction::Right,
        Direction::South,
        Direction::Down,
        Direction::West,
        Direction::Left,
        Direction::North,
    ];

    #[must_use]
    pub fn label(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
            Direction::Source => 'X',
        }
    }

    /// `(dx, dy)` in the grid's Cartesian coordinates (y grows upward).
    #[must_use]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::North => (-1, 1),
            Direction::South => (1, -1),
            Direction::East => (1, 1),
            Direction::West => (-1, -1),
            Direction::Source => (0, 0),
        }
    }

    /// Inverse of [`Direction::label`].
    #[must_use]
    pub fn from_label(label: char) -> Option<Direction> {
        match label {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            'N' => Some(Direction::North),
            'S' => Some(Direction::South),
            'E' => Some(Direction::East),
            'W' => Some(Direction::West),
            'X' => Some(Direction::Source),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A cell position: `x` in `1..=width` left to right, `y` in `1..=height` bottom to top.
///
/// Signed so that stepping off any edge still yields a representable value;
/// bounds are checked by [`crate::grid::Grid::is_in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: isize,
    pub y: isize,
}

impl Coord {
    #[must_use]
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// The neighboring coordinate one move in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Coord {
        let (dx, dy) = direction.offset();
        Coord::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_search_order_covers_moore_neighborhood() {
        let offsets: HashSet<(isize, isize)> =
            Direction::SEARCH_ORDER.iter().map(|d| d.offset()).collect();
        assert_eq!(offsets.len(), 8);
        assert!(!offsets.contains(&(0, 0)));
        for (dx, dy) in offsets {
            assert!(dx.abs() <= 1 && dy.abs() <= 1);
        }
    }

    #[test]
    fn test_search_order_excludes_source() {
        assert!(!Direction::SEARCH_ORDER.contains(&Direction::Source));
    }

    #[test]
    fn test_labels_round_trip() {
        for d in Direction::SEARCH_ORDER.iter().copied().chain([Direction::Source]) {
            assert_eq!(Direction::from_label(d.label()), Some(d));
        }
        assert_eq!(Direction::from_label('Q'), None);
    }

    #[test]
    fn test_diagonals_are_rotated() {
        assert_eq!(Direction::North.offset(), (-1, 1));
        assert_eq!(Direction::East.offset(), (1, 1));
        assert_eq!(Direction::South.offset(), (1, -1));
        assert_eq!(Direction::West.offset(), (-1, -1));
    }

    #[test]
    fn test_step() {
        let c = Coord::new(2, 2);
        assert_eq!(c.step(Direction::Up), Coord::new(2, 3));
        assert_eq!(c.step(Direction::West), Coord::new(1, 1));
        assert_eq!(c.step(Direction::Source), c);
        // stepping off the grid is still representable
        assert_eq!(Coord::new(1, 1).step(Direction::West), Coord::new(0, 0));
    }
}
