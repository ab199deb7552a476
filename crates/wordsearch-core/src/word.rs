//! Normalized puzzle words.

use std::fmt::{self, Display};

/// The form of a word used for placement: uppercase, with all whitespace removed.
///
/// A normalized word is never empty.
///
/// # Examples
///
/// ```
/// use wordsearch_core::NormalizedWord;
///
/// let word = NormalizedWord::new("Jack Fruit").unwrap();
/// assert_eq!(word.as_str(), "JACKFRUIT");
/// assert_eq!(word.len(), 9);
///
/// assert!(NormalizedWord::new(" \t ").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedWord {
    text: String,
    letters: Vec<char>,
}

impl NormalizedWord {
    /// Normalizes `word`, returning `None` if nothing is left.
    #[must_use]
    pub fn new(word: &str) -> Option<Self> {
        let text = word
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_uppercase)
            .collect::<String>();
        if text.is_empty() {
            return None;
        }
        let letters = text.chars().collect();
        Some(Self { text, letters })
    }

    /// Returns the normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the letters of the word in reading order.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Returns the number of cells the word occupies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always returns `false`; normalized words are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl Display for NormalizedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for NormalizedWord {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
