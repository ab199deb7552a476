//! The closed catalog of word directions.
//!
//! Every word occurrence in a puzzle reads along one of the eight [`Direction`]s.
//! A [`Mode`] selects which of them the generator may use.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// One of the eight canonical directions a word can read in.
///
/// Each variant owns both its unit step `(d_row, d_col)` and its canonical name,
/// so no other component keeps its own direction table.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Direction;
///
/// let dir = Direction::DiagonalUpRightToDownLeft;
/// assert_eq!(dir.delta(), (1, -1));
/// assert_eq!(dir.name(), "diagonal_up_right_to_down_left");
/// assert_eq!(Direction::from_delta(1, -1), Some(dir));
/// assert_eq!("diagonal_up_right_to_down_left".parse(), Ok(dir));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Reads rightward, step `(0, 1)`.
    HorizontalLeftToRight,
    /// Reads leftward, step `(0, -1)`.
    HorizontalRightToLeft,
    /// Reads downward, step `(1, 0)`.
    VerticalUpToDown,
    /// Reads upward, step `(-1, 0)`.
    VerticalDownToUp,
    /// Reads down and right, step `(1, 1)`.
    DiagonalUpLeftToDownRight,
    /// Reads up and left, step `(-1, -1)`.
    DiagonalDownRightToUpLeft,
    /// Reads down and left, step `(1, -1)`.
    DiagonalUpRightToDownLeft,
    /// Reads up and right, step `(-1, 1)`.
    DiagonalDownLeftToUpRight,
}

impl Direction {
    /// All directions in catalog order.
    ///
    /// This is also the order in which advanced-mode placement tries them.
    pub const ALL: [Self; 8] = [
        Self::HorizontalLeftToRight,
        Self::HorizontalRightToLeft,
        Self::VerticalUpToDown,
        Self::VerticalDownToUp,
        Self::DiagonalUpLeftToDownRight,
        Self::DiagonalDownRightToUpLeft,
        Self::DiagonalUpRightToDownLeft,
        Self::DiagonalDownLeftToUpRight,
    ];

    /// The forward-only directions: one horizontal, one vertical, one diagonal.
    pub const BASIC: [Self; 3] = [
        Self::HorizontalLeftToRight,
        Self::VerticalUpToDown,
        Self::DiagonalUpLeftToDownRight,
    ];

    /// Returns the unit step `(d_row, d_col)` of this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::HorizontalLeftToRight => (0, 1),
            Self::HorizontalRightToLeft => (0, -1),
            Self::VerticalUpToDown => (1, 0),
            Self::VerticalDownToUp => (-1, 0),
            Self::DiagonalUpLeftToDownRight => (1, 1),
            Self::DiagonalDownRightToUpLeft => (-1, -1),
            Self::DiagonalUpRightToDownLeft => (1, -1),
            Self::DiagonalDownLeftToUpRight => (-1, 1),
        }
    }

    /// Looks up the direction whose unit step is exactly `(d_row, d_col)`.
    ///
    /// Returns `None` for any vector outside the catalog, including `(0, 0)`.
    #[must_use]
    pub fn from_delta(d_row: isize, d_col: isize) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.delta() == (d_row, d_col))
    }

    /// Returns the canonical snake-case name of this direction.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HorizontalLeftToRight => "horizontal_left_to_right",
            Self::HorizontalRightToLeft => "horizontal_right_to_left",
            Self::VerticalUpToDown => "vertical_up_to_down",
            Self::VerticalDownToUp => "vertical_down_to_up",
            Self::DiagonalUpLeftToDownRight => "diagonal_up_left_to_down_right",
            Self::DiagonalDownRightToUpLeft => "diagonal_down_right_to_up_left",
            Self::DiagonalUpRightToDownLeft => "diagonal_up_right_to_down_left",
            Self::DiagonalDownLeftToUpRight => "diagonal_down_left_to_up_right",
        }
    }

    /// Returns an arrow glyph pointing along this direction.
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::HorizontalLeftToRight => '\u{2192}',
            Self::HorizontalRightToLeft => '\u{2190}',
            Self::VerticalUpToDown => '\u{2193}',
            Self::VerticalDownToUp => '\u{2191}',
            Self::DiagonalUpLeftToDownRight => '\u{2198}',
            Self::DiagonalDownRightToUpLeft => '\u{2196}',
            Self::DiagonalUpRightToDownLeft => '\u{2199}',
            Self::DiagonalDownLeftToUpRight => '\u{2197}',
        }
    }

    /// Returns `true` for the directions available in [`Mode::Basic`].
    #[must_use]
    pub fn is_basic(self) -> bool {
        Self::BASIC.contains(&self)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown direction name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown direction name: {name:?}")]
pub struct DirectionParseError {
    name: String,
}

impl FromStr for Direction {
    type Err = DirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.name() == s)
            .ok_or_else(|| DirectionParseError { name: s.to_owned() })
    }
}

/// Selects which directions the generator may place words in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Forward-only: left to right, top to bottom, and the down-right diagonal.
    #[default]
    Basic,
    /// All eight directions, including reversed and anti-diagonal ones.
    Advanced,
}

impl Mode {
    /// Returns the directions of this mode, in the order placement tries them.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch_core::{Direction, Mode};
    ///
    /// assert_eq!(Mode::Basic.directions().len(), 3);
    /// assert_eq!(Mode::Advanced.directions(), &Direction::ALL);
    /// ```
    #[must_use]
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Self::Basic => &Direction::BASIC,
            Self::Advanced => &Direction::ALL,
        }
    }

    /// Returns `true` if words may be placed in `direction` under this mode.
    #[must_use]
    pub fn allows(self, direction: Direction) -> bool {
        self.directions().contains(&direction)
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => f.write_str("basic"),
            Self::Advanced => f.write_str("advanced"),
        }
    }
}
