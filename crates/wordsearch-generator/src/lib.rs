//! Word search puzzle generation.
//!
//! This crate places a list of words into a square letter grid so that each word
//! reads contiguously in one of the allowed directions, preferring positions that
//! reuse letters of words already placed, and then fills the remaining cells with
//! random letters.
//!
//! # Overview
//!
//! - [`PuzzleGenerator`] validates a [`PuzzleRequest`], places its words longest
//!   first, and fills the rest of the grid.
//! - [`placement`] holds the exhaustive best-overlap search for a single word.
//! - [`Puzzle`] is the result: the filled grid, the placements, and the words
//!   that did not fit.
//! - [`Highlight`] is the render-facing view of a placement.
//! - [`PuzzleSeed`] makes every run reproducible.
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::Mode;
//! use wordsearch_generator::{PuzzleGenerator, PuzzleRequest, PuzzleSeed};
//!
//! let request = PuzzleRequest::new("Animals", ["cat", "dog", "horse"])
//!     .with_size(8)
//!     .with_mode(Mode::Advanced);
//! let seed = PuzzleSeed::from_phrase("animals");
//! let generated = PuzzleGenerator::new().generate_with_seed(&request, seed)?;
//!
//! for highlight in generated.puzzle.highlights() {
//!     println!(
//!         "{} starts at {:?} going {}",
//!         highlight.word(),
//!         highlight.start_xy(),
//!         highlight.direction()
//!     );
//! }
//! println!("{}", generated.puzzle.display_grid());
//! # Ok::<(), wordsearch_generator::GenerateError>(())
//! ```

pub use self::{
    error::GenerateError,
    generator::PuzzleGenerator,
    highlight::Highlight,
    placement::Placement,
    puzzle::{GeneratedPuzzle, GridDump, Puzzle, PuzzleRequest, SolutionDump},
    seed::{ParseSeedError, PuzzleSeed},
};

mod error;
mod generator;
mod highlight;
pub mod placement;
mod puzzle;
mod seed;
