use wordsearch_core::{Direction, Position};

use crate::Placement;

/// Render-facing description of where a word sits in a finished puzzle.
///
/// This is the only view of the solution renderers should depend on. The
/// direction is always one of the eight canonical [`Direction`]s, so a renderer
/// can map it to a step with [`Direction::delta`] or to a label with
/// [`Direction::name`].
///
/// # Examples
///
/// ```
/// use wordsearch_core::Mode;
/// use wordsearch_generator::{PuzzleGenerator, PuzzleRequest, PuzzleSeed};
///
/// let request = PuzzleRequest::new("Pets", ["cat"]).with_size(5).with_mode(Mode::Basic);
/// let generated = PuzzleGenerator::new()
///     .generate_with_seed(&request, PuzzleSeed::from_phrase("pets"))
///     .unwrap();
///
/// let highlights = generated.puzzle.highlights();
/// let cat = &highlights[0];
/// assert_eq!(cat.word(), "CAT");
/// assert_eq!(cat.length(), 3);
/// let (x, y) = cat.start_xy();
/// assert_eq!(generated.puzzle.grid().get(cat.start()), Some('C'));
/// assert_eq!((x, y), (cat.start().col(), cat.start().row()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Highlight {
    word: String,
    start: Position,
    direction: Direction,
    length: usize,
}

impl Highlight {
    /// Returns the normalized word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns the cell of the first letter.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the start cell as zero-based `(col, row)`, the order renderers use.
    #[must_use]
    pub fn start_xy(&self) -> (usize, usize) {
        self.start.xy()
    }

    /// Returns the reading direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the number of cells to highlight.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the highlighted cells in reading order.
    ///
    /// Stops early if a cell would fall outside a `size`×`size` grid.
    pub fn cells(&self, size: usize) -> impl Iterator<Item = Position> + use<> {
        let Self {
            start,
            direction,
            length,
            ..
        } = *self;
        (0..length).map_while(move |i| start.step(direction, i, size))
    }
}

impl From<&Placement> for Highlight {
    fn from(placement: &Placement) -> Self {
        Self {
            word: placement.word().to_owned(),
            start: placement.start(),
            direction: placement.direction(),
            length: placement.length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use wordsearch_core::{Grid, NormalizedWord};

    use super::*;
    use crate::placement::place_word;

    #[test]
    fn test_highlight_matches_placement() {
        let mut grid: Grid = "
            T . . .
            . . . .
            . . . .
            . . . .
        "
        .parse()
        .unwrap();
        let word = NormalizedWord::new("cat").unwrap();
        let mut rng = crate::PuzzleSeed::from_bytes([1; 32]).rng();
        let placement = place_word(
            &mut grid,
            &word,
            &[Direction::DiagonalDownLeftToUpRight, Direction::VerticalDownToUp],
            &mut rng,
        )
        .unwrap();

        let highlight = Highlight::from(&placement);
        assert_eq!(highlight.word(), "CAT");
        assert_eq!(highlight.length(), 3);
        assert_eq!(highlight.direction(), Direction::VerticalDownToUp);
        assert_eq!(highlight.start(), Position::new(2, 0));

        let cells = highlight.cells(grid.size()).collect::<Vec<_>>();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells.last(), Some(&Position::new(0, 0)));
        let letters = cells.iter().map(|&pos| grid[pos]).collect::<Option<String>>();
        assert_eq!(letters.as_deref(), Some("CAT"));
    }

    #[test]
    fn test_start_xy_is_col_row() {
        let highlight = Highlight {
            word: "AB".to_owned(),
            start: Position::new(4, 1),
            direction: Direction::HorizontalRightToLeft,
            length: 2,
        };
        assert_eq!(highlight.start_xy(), (1, 4));
        assert_eq!(
            highlight.cells(5).collect::<Vec<_>>(),
            [Position::new(4, 1), Position::new(4, 0)]
        );
        // Truncated by a smaller grid.
        assert_eq!(highlight.cells(1).count(), 0);
    }
}
