//! Grid position representation.

use std::fmt::{self, Display};

use crate::Direction;

/// A zero-based cell coordinate in a square grid.
///
/// Positions are always expressed as `(row, col)`. Renderers that want the
/// `(x, y)` order can use [`Position::xy`].
///
/// # Examples
///
/// ```
/// use wordsearch_core::Position;
///
/// let pos = Position::new(2, 4);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 4);
/// assert_eq!(pos.xy(), (4, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a new position from a row and a column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (y coordinate).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (x coordinate).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the position as an `(x, y)` pair, that is `(col, row)`.
    #[must_use]
    pub const fn xy(self) -> (usize, usize) {
        (self.col, self.row)
    }

    /// Returns the position `steps` cells away in `direction`, if it lies inside a
    /// `size`×`size` grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch_core::{Direction, Position};
    ///
    /// let pos = Position::new(0, 0);
    /// assert_eq!(
    ///     pos.step(Direction::DiagonalUpLeftToDownRight, 2, 5),
    ///     Some(Position::new(2, 2))
    /// );
    /// assert_eq!(pos.step(Direction::VerticalDownToUp, 1, 5), None);
    /// assert_eq!(pos.step(Direction::HorizontalLeftToRight, 5, 5), None);
    /// ```
    #[must_use]
    pub fn step(self, direction: Direction, steps: usize, size: usize) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        let steps = isize::try_from(steps).ok()?;
        let row = self.row.checked_add_signed(d_row.checked_mul(steps)?)?;
        let col = self.col.checked_add_signed(d_col.checked_mul(steps)?)?;
        (row < size && col < size).then_some(Self { row, col })
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
