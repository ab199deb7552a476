//! Core data structures for word search puzzles.
//!
//! This crate provides the value types shared by puzzle generation and by the
//! renderers consuming generated puzzles. It performs no randomness and no I/O.
//!
//! # Overview
//!
//! - [`position`]: Zero-based `(row, col)` cell coordinates
//! - [`direction`]: The closed catalog of eight [`Direction`]s and the [`Mode`]s
//!   selecting a subset of them
//! - [`grid`]: The square letter [`Grid`] words are placed into
//! - [`word`]: [`NormalizedWord`], the uppercase whitespace-free form used for placement
//! - [`alphabet`]: The [`Alphabet`] used to fill cells no word covers
//!
//! # Coordinate convention
//!
//! Rows grow downward and columns grow rightward. A [`Direction`] is a unit step
//! `(d_row, d_col)`, so [`Direction::VerticalUpToDown`] is `(1, 0)` and
//! [`Direction::HorizontalLeftToRight`] is `(0, 1)`.
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::{Direction, Grid, Position};
//!
//! let mut grid = Grid::new(5);
//! let start = Position::new(1, 0);
//! for (i, letter) in "CAT".chars().enumerate() {
//!     let pos = start.step(Direction::HorizontalLeftToRight, i, grid.size()).unwrap();
//!     grid.set(pos, letter);
//! }
//!
//! assert_eq!(grid.read(start, Direction::HorizontalLeftToRight, 3), Some("CAT".to_owned()));
//! ```

pub mod alphabet;
pub mod direction;
pub mod grid;
pub mod position;
pub mod word;

pub use self::{
    alphabet::{Alphabet, AlphabetError},
    direction::{Direction, DirectionParseError, Mode},
    grid::{Grid, GridParseError},
    position::Position,
    word::NormalizedWord,
};
