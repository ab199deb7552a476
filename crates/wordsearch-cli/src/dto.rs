use serde::{Deserialize, Serialize};
use wordsearch_core::Mode;
use wordsearch_generator::{GeneratedPuzzle, Highlight, PuzzleRequest};

/// Puzzle definitions file: `{"puzzles": [{"title": ..., "words": [...], "size": 15}]}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PuzzleBookDto {
    pub(crate) puzzles: Vec<PuzzleDefinitionDto>,
}

/// One puzzle of a definitions file. `size` falls back to the command-line default.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PuzzleDefinitionDto {
    pub(crate) title: String,
    pub(crate) words: Vec<String>,
    #[serde(default)]
    pub(crate) size: Option<i64>,
}

impl PuzzleDefinitionDto {
    pub(crate) fn into_request(self, default_size: i64, mode: Mode) -> PuzzleRequest {
        PuzzleRequest::new(self.title, self.words)
            .with_size(self.size.unwrap_or(default_size))
            .with_mode(mode)
    }
}

/// JSON view of a generated puzzle handed to renderers.
///
/// Grid rows are strings of one letter per cell.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeneratedPuzzleDto {
    pub(crate) title: String,
    pub(crate) seed: String,
    pub(crate) size: usize,
    pub(crate) mode: String,
    pub(crate) grid: Vec<String>,
    pub(crate) words: Vec<String>,
    pub(crate) failed_words: Vec<String>,
    pub(crate) highlights: Vec<HighlightDto>,
}

/// JSON view of a [`Highlight`]; `start` is `[col, row]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct HighlightDto {
    pub(crate) word: String,
    pub(crate) start: (usize, usize),
    pub(crate) direction: &'static str,
    pub(crate) length: usize,
}

impl From<&Highlight> for HighlightDto {
    fn from(highlight: &Highlight) -> Self {
        Self {
            word: highlight.word().to_owned(),
            start: highlight.start_xy(),
            direction: highlight.direction().name(),
            length: highlight.length(),
        }
    }
}

impl From<&GeneratedPuzzle> for GeneratedPuzzleDto {
    fn from(generated: &GeneratedPuzzle) -> Self {
        let puzzle = &generated.puzzle;
        Self {
            title: puzzle.title().to_owned(),
            seed: generated.seed.to_string(),
            size: puzzle.size(),
            mode: puzzle.mode().to_string(),
            grid: puzzle
                .grid()
                .rows()
                .map(|row| row.iter().map(|cell| cell.unwrap_or(' ')).collect())
                .collect(),
            words: puzzle.words().to_vec(),
            failed_words: puzzle.failed_words().to_vec(),
            highlights: puzzle.highlights().iter().map(HighlightDto::from).collect(),
        }
    }
}
