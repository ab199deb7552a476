/// Errors that reject a generation request before any grid is allocated.
///
/// Words that merely fail to fit are not errors; they are reported through
/// [`Puzzle::failed_words`](crate::Puzzle::failed_words).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// The requested size is zero or negative.
    #[display("puzzle size must be positive, got {size}")]
    InvalidSize {
        /// The requested size.
        size: i64,
    },
    /// The requested size exceeds [`PuzzleRequest::MAX_SIZE`](crate::PuzzleRequest::MAX_SIZE).
    #[display("puzzle size must be at most {max}, got {size}")]
    SizeTooLarge {
        /// The requested size.
        size: i64,
        /// The largest accepted size.
        max: i64,
    },
    /// The word list is empty or contains only blank words.
    #[display("puzzle has no words to place")]
    EmptyWordList,
    /// A word is empty or whitespace-only.
    #[display("word #{index} ({word:?}) is blank")]
    BlankWord {
        /// Index of the word in the request.
        index: usize,
        /// The word as given.
        word: String,
    },
}
