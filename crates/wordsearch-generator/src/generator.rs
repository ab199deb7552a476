use std::{cmp::Reverse, collections::HashSet};

use rand::{Rng, seq::IndexedRandom as _};
use wordsearch_core::{Alphabet, Grid, NormalizedWord};

use crate::{GenerateError, GeneratedPuzzle, Puzzle, PuzzleRequest, PuzzleSeed, placement};

/// Word search puzzle generator.
///
/// Words are placed longest first, each at a valid position sharing as many letters
/// as possible with the words already placed. Remaining blank cells are then filled
/// with letters drawn uniformly from the generator's [`Alphabet`].
///
/// Every random choice goes through the generator passed in (or derived from a
/// [`PuzzleSeed`]), so a seeded run is exactly reproducible.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Mode;
/// use wordsearch_generator::{PuzzleGenerator, PuzzleRequest};
///
/// let request = PuzzleRequest::new("Fruits", ["Apple", "banana", "Jack Fruit"])
///     .with_size(12)
///     .with_mode(Mode::Advanced);
/// let generated = PuzzleGenerator::new().generate(&request)?;
///
/// let puzzle = &generated.puzzle;
/// assert!(puzzle.grid().is_complete());
/// assert_eq!(puzzle.solution().len() + puzzle.failed_words().len(), 3);
///
/// // The seed reproduces the same puzzle.
/// let again = PuzzleGenerator::new().generate_with_seed(&request, generated.seed)?;
/// assert_eq!(again, generated);
/// # Ok::<(), wordsearch_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PuzzleGenerator {
    alphabet: Alphabet,
}

impl PuzzleGenerator {
    /// Creates a generator filling blank cells with `A`-`Z`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator filling blank cells from `alphabet`.
    ///
    /// Words containing letters outside `alphabet` are never placed.
    #[must_use]
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// Returns the fill alphabet.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Generates a puzzle from a freshly drawn random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if the request is invalid.
    pub fn generate(&self, request: &PuzzleRequest) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(request, PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if the request is invalid.
    pub fn generate_with_seed(
        &self,
        request: &PuzzleRequest,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        let puzzle = self.generate_with_rng(request, &mut seed.rng())?;
        Ok(GeneratedPuzzle { seed, puzzle })
    }

    /// Generates a puzzle drawing every random choice from `rng`.
    ///
    /// The request is validated before anything else happens. A word that cannot
    /// be placed is not an error: it is recorded in
    /// [`Puzzle::failed_words`] and generation continues.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::InvalidSize`] if `request.size` is not positive.
    /// - [`GenerateError::SizeTooLarge`] if `request.size` exceeds
    ///   [`PuzzleRequest::MAX_SIZE`].
    /// - [`GenerateError::EmptyWordList`] if there are no non-blank words.
    /// - [`GenerateError::BlankWord`] if some word is empty or whitespace-only.
    pub fn generate_with_rng<R>(
        &self,
        request: &PuzzleRequest,
        rng: &mut R,
    ) -> Result<Puzzle, GenerateError>
    where
        R: Rng + ?Sized,
    {
        let size = validate_size(request.size)?;
        let mut words = normalize_words(&request.words)?;
        // Stable: equal lengths keep input order.
        words.sort_by_key(|(_, word)| Reverse(word.len()));

        let directions = request.mode.directions();
        let mut grid = Grid::new(size);
        let mut solution = Vec::new();
        let mut failed_words = Vec::new();
        let mut seen = HashSet::new();

        for (original, word) in &words {
            if !seen.insert(word.as_str()) {
                log::debug!("skipping duplicate word {original:?}");
                continue;
            }
            if let Some(letter) = word.letters().iter().find(|&&l| !self.alphabet.contains(l)) {
                log::debug!("cannot place {original:?}: {letter:?} is not in the alphabet");
                failed_words.push((*original).to_owned());
                continue;
            }
            match placement::place_word(&mut grid, word, directions, rng) {
                Some(placement) => solution.push(placement),
                None => {
                    log::debug!("cannot place {original:?} in {:?}", request.title);
                    failed_words.push((*original).to_owned());
                }
            }
        }

        self.fill_blanks(&mut grid, rng);

        Ok(Puzzle {
            title: request.title.clone(),
            words: request.words.clone(),
            mode: request.mode,
            grid,
            solution,
            failed_words,
        })
    }

    fn fill_blanks<R>(&self, grid: &mut Grid, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for pos in grid.positions() {
            if grid.is_blank(pos) {
                let &letter = self
                    .alphabet
                    .letters()
                    .choose(rng)
                    .expect("alphabet is never empty");
                grid.set(pos, letter);
            }
        }
    }
}

fn validate_size(size: i64) -> Result<usize, GenerateError> {
    if size > PuzzleRequest::MAX_SIZE {
        return Err(GenerateError::SizeTooLarge {
            size,
            max: PuzzleRequest::MAX_SIZE,
        });
    }
    usize::try_from(size)
        .ok()
        .filter(|&size| size > 0)
        .ok_or(GenerateError::InvalidSize { size })
}

fn normalize_words(words: &[String]) -> Result<Vec<(&str, NormalizedWord)>, GenerateError> {
    if words.iter().all(|word| word.trim().is_empty()) {
        return Err(GenerateError::EmptyWordList);
    }
    words
        .iter()
        .enumerate()
        .map(|(index, word)| {
            NormalizedWord::new(word)
                .map(|normalized| (word.as_str(), normalized))
                .ok_or_else(|| GenerateError::BlankWord {
                    index,
                    word: word.clone(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use wordsearch_core::{Direction, Mode, Position};

    use super::*;

    fn seeded(phrase: &str) -> PuzzleSeed {
        PuzzleSeed::from_phrase(phrase)
    }

    fn generate(request: &PuzzleRequest, phrase: &str) -> Puzzle {
        PuzzleGenerator::new()
            .generate_with_seed(request, seeded(phrase))
            .unwrap()
            .puzzle
    }

    fn assert_reconstructs(puzzle: &Puzzle) {
        for placement in puzzle.solution() {
            assert_eq!(
                puzzle.grid().read(
                    placement.start(),
                    placement.direction(),
                    placement.length()
                ),
                Some(placement.word().to_owned()),
                "{placement:?}"
            );
        }
    }

    #[test]
    fn test_single_short_word_is_placed() {
        let request = PuzzleRequest::new("Pets", ["CAT"]).with_size(5);
        for phrase in ["a", "b", "c", "d"] {
            let puzzle = generate(&request, phrase);
            assert!(puzzle.failed_words().is_empty());
            assert_eq!(puzzle.solution().len(), 1);
            assert!(Mode::Basic.allows(puzzle.solution()[0].direction()));
            assert!(puzzle.grid().is_complete());
            assert_reconstructs(&puzzle);
        }
    }

    #[test]
    fn test_too_long_word_fails_but_grid_is_filled() {
        for mode in [Mode::Basic, Mode::Advanced] {
            let request = PuzzleRequest::new("Long", ["SUPERCALIFRAGILISTIC"])
                .with_size(5)
                .with_mode(mode);
            let puzzle = generate(&request, "long");
            assert!(puzzle.solution().is_empty());
            assert_eq!(puzzle.failed_words(), ["SUPERCALIFRAGILISTIC"]);
            assert!(puzzle.grid().is_complete());
            let alphabet = Alphabet::default();
            assert!(
                puzzle
                    .grid()
                    .positions()
                    .all(|pos| puzzle.grid()[pos].is_some_and(|l| alphabet.contains(l)))
            );
        }
    }

    #[test]
    fn test_second_word_crosses_the_first() {
        let request = PuzzleRequest::new("Crossing", ["CAT", "CAR"])
            .with_size(5)
            .with_mode(Mode::Advanced);
        for phrase in ["x", "y", "z", "w", "v"] {
            let puzzle = generate(&request, phrase);
            assert!(puzzle.failed_words().is_empty());
            let [cat, car] = puzzle.solution() else {
                panic!("expected two placements");
            };
            let cells = |p: &crate::Placement| {
                (0..p.length())
                    .map(|i| p.start().step(p.direction(), i, 5).unwrap())
                    .collect::<HashSet<Position>>()
            };
            assert!(
                !cells(cat).is_disjoint(&cells(car)),
                "{cat:?} and {car:?} do not cross"
            );
            assert_reconstructs(&puzzle);
        }
    }

    #[test]
    fn test_invalid_sizes_are_rejected() {
        let generator = PuzzleGenerator::new();
        for size in [0, -1, -15] {
            let request = PuzzleRequest::new("Bad", ["CAT"]).with_size(size);
            assert_eq!(
                generator.generate(&request),
                Err(GenerateError::InvalidSize { size })
            );
        }
    }

    #[test]
    fn test_oversized_grids_are_rejected() {
        let generator = PuzzleGenerator::new();
        for size in [PuzzleRequest::MAX_SIZE + 1, 1 << 32, i64::MAX] {
            let request = PuzzleRequest::new("Huge", ["CAT"]).with_size(size);
            assert_eq!(
                generator.generate_with_seed(&request, seeded("huge")),
                Err(GenerateError::SizeTooLarge {
                    size,
                    max: PuzzleRequest::MAX_SIZE
                })
            );
        }
    }

    #[test]
    fn test_largest_size_is_accepted() {
        let request = PuzzleRequest::new("Largest", ["CAT"]).with_size(PuzzleRequest::MAX_SIZE);
        let puzzle = generate(&request, "largest");
        assert_eq!(puzzle.size(), 1000);
        assert_eq!(puzzle.solution().len(), 1);
    }

    #[test]
    fn test_empty_word_lists_are_rejected() {
        let generator = PuzzleGenerator::new();
        let empty = PuzzleRequest::new("Empty", Vec::<String>::new());
        assert_eq!(generator.generate(&empty), Err(GenerateError::EmptyWordList));
        let blank = PuzzleRequest::new("Blank", ["  ", "\t"]);
        assert_eq!(generator.generate(&blank), Err(GenerateError::EmptyWordList));
        let one_blank = PuzzleRequest::new("One blank", ["cat", " "]);
        assert_eq!(
            generator.generate(&one_blank),
            Err(GenerateError::BlankWord {
                index: 1,
                word: " ".to_owned()
            })
        );
    }

    #[test]
    fn test_longest_words_are_placed_first() {
        let request = PuzzleRequest::new("Order", ["ox", "horse", "cat", "dog", "zebra"])
            .with_size(8)
            .with_mode(Mode::Advanced);
        let puzzle = generate(&request, "order");
        let order = puzzle
            .solution()
            .iter()
            .map(crate::Placement::word)
            .collect::<Vec<_>>();
        assert_eq!(order, ["HORSE", "ZEBRA", "CAT", "DOG", "OX"]);
    }

    #[test]
    fn test_failed_words_keep_original_spelling() {
        let request = PuzzleRequest::new("Spelling", ["Jack Fruit", "fig"]).with_size(4);
        let puzzle = generate(&request, "spelling");
        assert_eq!(puzzle.failed_words(), ["Jack Fruit"]);
        assert_eq!(puzzle.solution()[0].word(), "FIG");
        assert_eq!(puzzle.words(), ["Jack Fruit", "fig"]);
    }

    #[test]
    fn test_duplicates_are_placed_once() {
        let request = PuzzleRequest::new("Dupes", ["cat", "CAT", "c a t"]).with_size(5);
        let puzzle = generate(&request, "dupes");
        assert_eq!(puzzle.solution().len(), 1);
        assert!(puzzle.failed_words().is_empty());
        assert_eq!(puzzle.words().len(), 3);
    }

    #[test]
    fn test_letters_outside_alphabet_fail() {
        let alphabet: Alphabet = "ABCDEFGHIJKLMNOPQRSTUVWXYZ".parse().unwrap();
        let generator = PuzzleGenerator::with_alphabet(alphabet);
        let request = PuzzleRequest::new("Symbols", ["T-REX", "DINO"]).with_size(6);
        let puzzle = generator
            .generate_with_seed(&request, seeded("symbols"))
            .unwrap()
            .puzzle;
        assert_eq!(puzzle.failed_words(), ["T-REX"]);
        assert_eq!(puzzle.solution()[0].word(), "DINO");
    }

    #[test]
    fn test_custom_alphabet_fill() {
        let generator = PuzzleGenerator::with_alphabet("XYZ".parse().unwrap());
        let request = PuzzleRequest::new("Tiny", ["XY"]).with_size(6);
        let puzzle = generator
            .generate_with_seed(&request, seeded("tiny"))
            .unwrap()
            .puzzle;
        assert!(
            puzzle
                .grid()
                .positions()
                .all(|pos| matches!(puzzle.grid()[pos], Some('X' | 'Y' | 'Z')))
        );
    }

    #[test]
    fn test_custom_alphabet_grid_round_trips() {
        let generator = PuzzleGenerator::with_alphabet("ABC".parse().unwrap());
        let request = PuzzleRequest::new("Cab", ["cab"]).with_size(4);
        let puzzle = generator
            .generate_with_seed(&request, seeded("cab"))
            .unwrap()
            .puzzle;
        assert_eq!(puzzle.solution()[0].word(), "CAB");
        assert!(puzzle.failed_words().is_empty());

        let reparsed: Grid = puzzle.grid().to_string().parse().unwrap();
        assert!(reparsed.is_complete());
        assert_eq!(&reparsed, puzzle.grid());
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let request = PuzzleRequest::new("Fruits", ["apple", "banana", "cherry", "grape"])
            .with_size(10)
            .with_mode(Mode::Advanced);
        let a = generate(&request, "fruits");
        let b = generate(&request, "fruits");
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.solution(), b.solution());
        let c = generate(&request, "other fruits");
        assert_ne!(a.grid(), c.grid());
    }

    #[test]
    fn test_basic_mode_never_reverses() {
        let request =
            PuzzleRequest::new("Basic", ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"])
                .with_size(9);
        for phrase in ["1", "2", "3", "4", "5"] {
            let puzzle = generate(&request, phrase);
            for placement in puzzle.solution() {
                assert!(Direction::BASIC.contains(&placement.direction()));
            }
        }
    }
}
