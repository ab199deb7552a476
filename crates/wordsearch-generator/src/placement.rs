//! Best-overlap word placement.
//!
//! Placing a word is split in two steps:
//!
//! - [`find_best_placements`] scans the grid without mutating it and collects every
//!   valid placement that shares the most letters with words already on the grid.
//! - [`place_word`] picks one of those uniformly at random and writes it.
//!
//! A placement is valid when it stays inside the grid and every cell it covers is
//! either blank or already holds the required letter.

use rand::{Rng, seq::IndexedRandom as _};
use wordsearch_core::{Direction, Grid, NormalizedWord, Position};

/// A committed word occurrence on the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    pub(crate) word: String,
    pub(crate) start: Position,
    pub(crate) direction: Direction,
    pub(crate) length: usize,
}

impl Placement {
    fn new(word: &NormalizedWord, candidate: Candidate) -> Self {
        Self {
            word: word.as_str().to_owned(),
            start: candidate.start,
            direction: candidate.direction,
            length: word.len(),
        }
    }

    /// Returns the normalized word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns the cell holding the first letter.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the reading direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the number of cells covered.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A valid start cell and direction for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// Cell holding the first letter.
    pub start: Position,
    /// Reading direction.
    pub direction: Direction,
}

/// The valid placements of a word sharing the highest number of letters with the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BestPlacements {
    overlap: usize,
    candidates: Vec<Candidate>,
}

impl BestPlacements {
    /// Returns the number of cells each candidate shares with existing letters.
    ///
    /// Meaningless when [`is_empty`](Self::is_empty) returns `true`.
    #[must_use]
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Returns the tied candidates in search order.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Returns `true` if the word fits nowhere.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    fn offer(&mut self, candidate: Candidate, overlap: usize) {
        if self.candidates.is_empty() || overlap > self.overlap {
            self.overlap = overlap;
            self.candidates.clear();
            self.candidates.push(candidate);
        } else if overlap == self.overlap {
            self.candidates.push(candidate);
        }
    }
}

/// Counts the letters `word` would share with the grid if placed at `start` going
/// `direction`, or returns `None` if that placement is invalid.
#[must_use]
pub fn overlap_at(
    grid: &Grid,
    word: &NormalizedWord,
    start: Position,
    direction: Direction,
) -> Option<usize> {
    let size = grid.size();
    if !grid.contains(start) {
        return None;
    }
    start.step(direction, word.len() - 1, size)?;

    let mut overlap = 0;
    for (i, &letter) in word.letters().iter().enumerate() {
        let pos = start.step(direction, i, size)?;
        match grid.get(pos) {
            None => {}
            Some(existing) if existing == letter => overlap += 1,
            Some(_) => return None,
        }
    }
    Some(overlap)
}

/// Finds every valid placement of `word` with maximal overlap.
///
/// Candidates are enumerated direction by direction in the order of `directions`,
/// then rows ascending, then columns ascending; the returned ties keep that order.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Direction, Grid, NormalizedWord, Position};
/// use wordsearch_generator::placement::find_best_placements;
///
/// let grid: Grid = "
///     C . .
///     . . .
///     . . .
/// "
/// .parse()
/// .unwrap();
/// let word = NormalizedWord::new("cat").unwrap();
///
/// let best = find_best_placements(&grid, &word, &Direction::BASIC);
/// assert_eq!(best.overlap(), 1);
/// // Every tie starts on the existing `C`.
/// assert!(best.candidates().iter().all(|c| c.start == Position::new(0, 0)));
/// assert_eq!(best.candidates().len(), 3);
/// ```
#[must_use]
pub fn find_best_placements(
    grid: &Grid,
    word: &NormalizedWord,
    directions: &[Direction],
) -> BestPlacements {
    let mut best = BestPlacements::default();
    for &direction in directions {
        for start in grid.positions() {
            if let Some(overlap) = overlap_at(grid, word, start, direction) {
                best.offer(Candidate { start, direction }, overlap);
            }
        }
    }
    log::trace!(
        "{word}: {} candidate(s) with overlap {}",
        best.candidates.len(),
        best.overlap
    );
    best
}

/// Places `word` on the grid at one of its best placements, chosen uniformly with `rng`.
///
/// Returns `None`, leaving the grid untouched, if the word fits nowhere. Not
/// fitting is an expected outcome, not an error.
pub fn place_word<R>(
    grid: &mut Grid,
    word: &NormalizedWord,
    directions: &[Direction],
    rng: &mut R,
) -> Option<Placement>
where
    R: Rng + ?Sized,
{
    let best = find_best_placements(grid, word, directions);
    let &candidate = best.candidates.choose(rng)?;

    let size = grid.size();
    let cells = (0..).map_while(|i| candidate.start.step(candidate.direction, i, size));
    for (pos, &letter) in cells.zip(word.letters()) {
        grid.set(pos, letter);
    }

    log::debug!(
        "placed {word} at {} going {} (overlap {})",
        candidate.start,
        candidate.direction,
        best.overlap
    );
    Some(Placement::new(word, candidate))
}
