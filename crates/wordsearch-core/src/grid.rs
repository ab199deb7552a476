//! Square letter grid.
//!
//! A [`Grid`] holds `size × size` cells in row-major order. Each cell is either
//! blank or holds exactly one letter.
//!
//! # String format
//!
//! [`Grid`] implements [`Display`] and [`FromStr`] with a line-per-row format:
//! cells are single characters, `.` (or `_` when parsing) marks a blank cell, and
//! whitespace between cells is ignored.
//!
//! ```
//! use wordsearch_core::{Grid, Position};
//!
//! let grid: Grid = "
//!     C A T
//!     . . .
//!     . . .
//! "
//! .parse()
//! .unwrap();
//!
//! assert_eq!(grid.size(), 3);
//! assert_eq!(grid.get(Position::new(0, 1)), Some('A'));
//! assert_eq!(grid.get(Position::new(1, 1)), None);
//! assert_eq!(grid.to_string(), "C A T\n. . .\n. . .");
//! ```

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Direction, Position};

/// A square grid of letter cells.
///
/// Cells are `None` while blank and `Some(letter)` once a letter is written.
/// All accessors are bounds-checked: reading or writing outside the grid is a
/// programming error and panics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Creates a blank `size × size` grid.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or if `size × size` overflows `usize`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be positive");
        let len = size
            .checked_mul(size)
            .unwrap_or_else(|| panic!("a {size}x{size} grid does not fit in memory"));
        Self {
            size,
            cells: vec![None; len],
        }
    }

    /// Returns the number of rows (and columns) of this grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `pos` lies inside this grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row() < self.size && pos.col() < self.size
    }

    #[track_caller]
    fn index_of(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position {pos} is outside the {size}x{size} grid",
            size = self.size
        );
        pos.row() * self.size + pos.col()
    }

    /// Returns the letter at `pos`, or `None` if the cell is blank.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    #[track_caller]
    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells[self.index_of(pos)]
    }

    /// Writes `letter` into the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[track_caller]
    pub fn set(&mut self, pos: Position, letter: char) {
        let i = self.index_of(pos);
        self.cells[i] = Some(letter);
    }

    /// Returns `true` if `pos` is blank.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    #[track_caller]
    pub fn is_blank(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Returns `true` if no cell is blank.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns an iterator over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Returns an iterator over the blank positions in row-major order.
    pub fn blank_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(|&pos| self.is_blank(pos))
    }

    /// Returns the cells of row `row`, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside the grid.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Option<char>] {
        assert!(row < self.size, "row {row} is outside the grid");
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Returns an iterator over all rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.size)
    }

    /// Reads `len` letters starting at `start` and stepping along `direction`.
    ///
    /// Returns `None` if the line leaves the grid or crosses a blank cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch_core::{Direction, Grid, Position};
    ///
    /// let grid: Grid = "TAC\n...\n...".parse().unwrap();
    /// let start = Position::new(0, 2);
    /// assert_eq!(grid.read(start, Direction::HorizontalRightToLeft, 3), Some("CAT".to_owned()));
    /// assert_eq!(grid.read(start, Direction::VerticalUpToDown, 2), None);
    /// ```
    #[must_use]
    pub fn read(&self, start: Position, direction: Direction, len: usize) -> Option<String> {
        (0..len)
            .map(|i| {
                let pos = start.step(direction, i, self.size)?;
                self.get(pos)
            })
            .collect()
    }
}

impl Index<Position> for Grid {
    type Output = Option<char>;

    #[track_caller]
    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[self.index_of(pos)]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.unwrap_or('.'))?;
            }
        }
        Ok(())
    }
}

/// Error returned when parsing a [`Grid`] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The string contains no rows.
    #[display("grid is empty")]
    Empty,
    /// A row has a different number of cells than there are rows.
    #[display("row {row} has {len} cells, expected {size}")]
    NotSquare {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of cells found in that row.
        len: usize,
        /// Expected number of cells (the number of rows).
        size: usize,
    },
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| match c {
                        '.' | '_' => None,
                        c => Some(c),
                    })
                    .collect::<Vec<_>>()
            })
            .filter(|row| !row.is_empty())
            .collect::<Vec<_>>();

        let size = rows.len();
        if size == 0 {
            return Err(GridParseError::Empty);
        }
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(GridParseError::NotSquare {
                row,
                len: cells.len(),
                size,
            });
        }

        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_grid_is_blank() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.blank_positions().count(), 16);
        assert!(!grid.is_complete());
        assert!(grid.positions().all(|pos| grid[pos].is_none()));
    }

    #[test]
    fn test_set_only_touches_one_cell() {
        let mut grid = Grid::new(3);
        grid.set(Position::new(1, 2), 'Q');
        assert_eq!(grid.get(Position::new(1, 2)), Some('Q'));
        assert_eq!(grid.blank_positions().count(), 8);
        assert_eq!(grid.row(1), &[None, None, Some('Q')]);
    }

    #[test]
    fn test_complete_after_filling() {
        let mut grid = Grid::new(2);
        for pos in grid.positions().collect::<Vec<_>>() {
            grid.set(pos, 'X');
        }
        assert!(grid.is_complete());
        assert_eq!(grid.to_string(), "X X\nX X");
    }

    #[test]
    #[should_panic(expected = "grid size must be positive")]
    fn test_zero_size_panics() {
        let _ = Grid::new(0);
    }

    #[test]
    #[should_panic(expected = "does not fit in memory")]
    fn test_overflowing_size_panics() {
        let _ = Grid::new(usize::MAX);
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 grid")]
    fn test_get_out_of_bounds_panics() {
        let grid = Grid::new(3);
        let _ = grid.get(Position::new(0, 3));
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 grid")]
    fn test_set_out_of_bounds_panics() {
        let mut grid = Grid::new(3);
        grid.set(Position::new(3, 0), 'A');
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Grid>(), Err(GridParseError::Empty));
        assert_eq!("  \n \n".parse::<Grid>(), Err(GridParseError::Empty));
        assert_eq!(
            "AB\nC".parse::<Grid>(),
            Err(GridParseError::NotSquare {
                row: 1,
                len: 1,
                size: 2
            })
        );
    }

    #[test]
    fn test_read_lines() {
        let grid: Grid = "
            D O G
            . A .
            . . T
        "
        .parse()
        .unwrap();
        let origin = Position::new(0, 0);
        assert_eq!(
            grid.read(origin, Direction::HorizontalLeftToRight, 3),
            Some("DOG".to_owned())
        );
        assert_eq!(
            grid.read(origin, Direction::DiagonalUpLeftToDownRight, 3),
            Some("DAT".to_owned())
        );
        assert_eq!(grid.read(origin, Direction::VerticalUpToDown, 2), None);
        assert_eq!(grid.read(origin, Direction::HorizontalLeftToRight, 4), None);
        assert_eq!(grid.read(origin, Direction::HorizontalLeftToRight, 0), Some(String::new()));
    }

    proptest! {
        #[test]
        fn test_display_parse_round_trip(
            size in 1usize..8,
            letters in prop::collection::vec(prop::option::of(prop::char::range('A', 'Z')), 64),
        ) {
            let mut grid = Grid::new(size);
            for (pos, letter) in grid.positions().collect::<Vec<_>>().into_iter().zip(letters) {
                if let Some(letter) = letter {
                    grid.set(pos, letter);
                }
            }
            let parsed: Grid = grid.to_string().parse().unwrap();
            prop_assert_eq!(parsed, grid);
        }
    }
}
