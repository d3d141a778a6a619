//! The letter grid and its coordinate system.
//!
//! Rows are stored top to bottom as given in the input, but cells are addressed with
//! 1-indexed Cartesian coordinates: `x` grows left to right and `y` grows bottom to
//! top. Stored row 0 is therefore `y == height` and the last stored row is `y == 1`.

use crate::direction::{Coord, Direction};
use crate::errors::PuzzleError;
use log::debug;
use std::fmt;

/// An immutable rectangular matrix of characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    /// Row-major storage, `width * height` cells.
    cells: Vec<char>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Build a grid from rows, rejecting it if any row differs in length from the one
    /// before it. Zero rows make an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::RaggedGrid`] at the first mismatched row.
    pub fn from_rows<I, S>(rows: I) -> Result<Grid, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for row in rows {
            let before = cells.len();
            cells.extend(row.as_ref().chars());
            let found = cells.len() - before;

            if height == 0 {
                width = found;
            } else if found != width {
                return Err(PuzzleError::RaggedGrid {
                    row: height + 1,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }

        debug!("Grid ready: {width}x{height}");
        Ok(Grid { cells, width, height })
    }

    /// Parse rows from text, one per line, up to the first empty line.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::from_rows`].
    pub fn parse_from_str(contents: &str) -> Result<Grid, PuzzleError> {
        Self::from_rows(contents.lines().take_while(|line| !line.is_empty()))
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Io`] if the file cannot be read, or any error from
    /// [`Grid::parse_from_str`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Grid, PuzzleError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| PuzzleError::Io {
            what: "grid",
            path: path_ref.display().to_string(),
            source,
        })?;
        Self::parse_from_str(&data)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells, which is also the number of search origins.
    #[must_use]
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.index_of(coord).is_some()
    }

    /// The character at `coord`, or `None` outside the grid.
    #[must_use]
    pub fn char_at(&self, coord: Coord) -> Option<char> {
        self.index_of(coord).map(|i| self.cells[i])
    }

    /// Storage index of `coord`: row `height - y`, column `x - 1`.
    ///
    /// Also used to index per-search visited state, so it is dense in `0..num_cells()`.
    #[must_use]
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        let x = usize::try_from(coord.x).ok()?;
        let y = usize::try_from(coord.y).ok()?;
        if x == 0 || y == 0 || x > self.width || y > self.height {
            return None;
        }
        Some((self.height - y) * self.width + (x - 1))
    }

    /// All eight neighbors of `coord` in search order, paired with the move that
    /// reaches them. Not filtered by bounds.
    pub fn neighbors(coord: Coord) -> impl Iterator<Item = (Coord, Direction)> {
        Direction::SEARCH_ORDER
            .into_iter()
            .map(move |d| (coord.step(d), d))
    }

    /// Every in-bounds coordinate, `x` outer and `y` inner, both ascending.
    /// This is the order in which cells are used as search origins.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (1..=self.width).flat_map(move |x| {
            (1..=self.height).map(move |y| Coord::new(x as isize, y as isize))
        })
    }

    /// Rows as strings, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| row.iter().collect())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows(["CAT", "ARD", "TXG"]).unwrap()
    }

    #[test]
    fn test_dimensions() {
        let g = Grid::from_rows(["ABCD", "EFGH"]).unwrap();
        assert_eq!((g.width(), g.height()), (4, 2));
        assert_eq!(g.num_cells(), 8);
    }

    #[test]
    fn test_char_at_uses_cartesian_coordinates() {
        let g = sample();
        // top-left
        assert_eq!(g.char_at(Coord::new(1, 3)), Some('C'));
        // bottom-left
        assert_eq!(g.char_at(Coord::new(1, 1)), Some('T'));
        // bottom-right
        assert_eq!(g.char_at(Coord::new(3, 1)), Some('G'));
        assert_eq!(g.char_at(Coord::new(2, 2)), Some('R'));
    }

    #[test]
    fn test_bounds() {
        let g = sample();
        assert!(g.is_in_bounds(Coord::new(1, 1)));
        assert!(g.is_in_bounds(Coord::new(3, 3)));
        for c in [Coord::new(0, 1), Coord::new(1, 0), Coord::new(4, 1), Coord::new(1, 4), Coord::new(-1, -1)] {
            assert!(!g.is_in_bounds(c), "{c} should be out of bounds");
            assert_eq!(g.char_at(c), None);
        }
    }

    #[test]
    fn test_neighbors_unfiltered() {
        let around_corner: Vec<_> = Grid::neighbors(Coord::new(1, 1)).collect();
        assert_eq!(around_corner.len(), 8);
        assert_eq!(around_corner[0], (Coord::new(1, 2), Direction::Up));
        assert!(around_corner.contains(&(Coord::new(0, 0), Direction::West)));
    }

    #[test]
    fn test_ragged_grid_rejected() {
        let err = Grid::from_rows(["ABC", "AB", "ABC"]).unwrap_err();
        assert!(matches!(err, PuzzleError::RaggedGrid { row: 2, expected: 3, found: 2 }));
    }

    #[test]
    fn test_parse_from_str_stops_at_empty_line() {
        let g = Grid::parse_from_str("AB\nCD\n\nEFG\n").unwrap();
        assert_eq!((g.width(), g.height()), (2, 2));
    }

    #[test]
    fn test_empty_grid() {
        let g = Grid::parse_from_str("").unwrap();
        assert!(g.is_empty());
        assert_eq!((g.width(), g.height()), (0, 0));
        assert_eq!(g.coords().count(), 0);
        assert_eq!(g.to_string(), "");
    }

    #[test]
    fn test_coords_order() {
        let g = Grid::from_rows(["AB", "CD"]).unwrap();
        let coords: Vec<_> = g.coords().collect();
        assert_eq!(
            coords,
            vec![Coord::new(1, 1), Coord::new(1, 2), Coord::new(2, 1), Coord::new(2, 2)]
        );
    }

    #[test]
    fn test_display_round_trips_rows() {
        assert_eq!(sample().to_string(), "CAT\nARD\nTXG\n");
    }

    #[test]
    fn test_multibyte_rows_count_chars() {
        let g = Grid::from_rows(["ÄB", "CÖ"]).unwrap();
        assert_eq!(g.width(), 2);
        assert_eq!(g.char_at(Coord::new(2, 1)), Some('Ö'));
    }
}
