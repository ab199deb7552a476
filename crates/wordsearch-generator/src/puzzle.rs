use std::fmt::{self, Display};

use wordsearch_core::{Grid, Mode};

use crate::{Highlight, Placement, PuzzleSeed};

/// Everything needed to generate one puzzle.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Mode;
/// use wordsearch_generator::PuzzleRequest;
///
/// let request = PuzzleRequest::new("Fruits", ["Apple", "banana"]);
/// assert_eq!(request.size, PuzzleRequest::DEFAULT_SIZE);
/// assert_eq!(request.mode, Mode::Basic);
///
/// let request = request.with_size(12).with_mode(Mode::Advanced);
/// assert_eq!(request.size, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleRequest {
    /// Puzzle title, passed through untouched.
    pub title: String,
    /// Words to hide, as the user wrote them.
    pub words: Vec<String>,
    /// Number of rows and columns. Validated to lie in `1..=MAX_SIZE` at generation time.
    pub size: i64,
    /// Which directions words may read in.
    pub mode: Mode,
}

impl PuzzleRequest {
    /// Grid size used when none is given.
    pub const DEFAULT_SIZE: i64 = 15;

    /// Largest grid size accepted by the generator.
    pub const MAX_SIZE: i64 = 1000;

    /// Creates a request with the default size and mode.
    pub fn new<T, I>(title: T, words: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            title: title.into(),
            words: words.into_iter().map(Into::into).collect(),
            size: Self::DEFAULT_SIZE,
            mode: Mode::default(),
        }
    }

    /// Sets the grid size.
    #[must_use]
    pub fn with_size(self, size: i64) -> Self {
        Self { size, ..self }
    }

    /// Sets the direction mode.
    #[must_use]
    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }
}

/// A generated word search puzzle.
///
/// The grid is complete: every cell holds a letter. Words that could not be placed
/// are listed in [`failed_words`](Self::failed_words) and still appear in
/// [`words`](Self::words).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub(crate) title: String,
    pub(crate) words: Vec<String>,
    pub(crate) mode: Mode,
    pub(crate) grid: Grid,
    pub(crate) solution: Vec<Placement>,
    pub(crate) failed_words: Vec<String>,
}

impl Puzzle {
    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the input words, unmodified and in input order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Returns the direction mode the puzzle was generated with.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the filled letter grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the placements in the order words were placed (longest first).
    #[must_use]
    pub fn solution(&self) -> &[Placement] {
        &self.solution
    }

    /// Returns the input words that could not be placed, unmodified.
    #[must_use]
    pub fn failed_words(&self) -> &[String] {
        &self.failed_words
    }

    /// Returns the render-facing description of every placed word.
    #[must_use]
    pub fn highlights(&self) -> Vec<Highlight> {
        self.solution.iter().map(Highlight::from).collect()
    }

    /// Returns a plain-text dump of the title, grid, and failed words.
    ///
    /// Intended for debugging; the format is not stable.
    #[must_use]
    pub fn display_grid(&self) -> GridDump<'_> {
        GridDump(self)
    }

    /// Returns a plain-text dump of where every word was placed.
    ///
    /// Intended for debugging; the format is not stable.
    #[must_use]
    pub fn display_solution(&self) -> SolutionDump<'_> {
        SolutionDump(self)
    }
}

/// A puzzle together with the seed that reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// Seed driving every random choice made for this puzzle.
    pub seed: PuzzleSeed,
    /// The generated puzzle.
    pub puzzle: Puzzle,
}

/// Text dump returned by [`Puzzle::display_grid`].
#[derive(Debug, Clone, Copy)]
pub struct GridDump<'a>(&'a Puzzle);

impl Display for GridDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let puzzle = self.0;
        let size = puzzle.size();
        writeln!(f, "Grid:")?;
        writeln!(f, "\t{} - {size}x{size}", puzzle.title)?;
        for line in puzzle.grid.to_string().lines() {
            writeln!(f, "\t{line}")?;
        }
        if !puzzle.failed_words.is_empty() {
            writeln!(f)?;
            writeln!(f, "Failed words:")?;
            for word in &puzzle.failed_words {
                writeln!(f, "\t{word}")?;
            }
        }
        Ok(())
    }
}

/// Text dump returned by [`Puzzle::display_solution`].
#[derive(Debug, Clone, Copy)]
pub struct SolutionDump<'a>(&'a Puzzle);

impl Display for SolutionDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solution:")?;
        for highlight in self.0.highlights() {
            let (x, y) = highlight.start_xy();
            writeln!(
                f,
                "\tWord: {}, Start: ({x}, {y}), Direction: {}, Length: {}",
                highlight.word(),
                highlight.direction().arrow(),
                highlight.length(),
            )?;
        }
        Ok(())
    }
}
