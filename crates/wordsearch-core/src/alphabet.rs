//! Letter sets used to fill blank cells.

use std::{collections::HashSet, str::FromStr};

/// The set of letters blank cells are filled with.
///
/// An alphabet is non-empty, holds only uppercase letters (or letters without
/// case), and contains each letter at most once, so drawing a uniform index
/// draws a uniform letter.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Alphabet;
///
/// let latin = Alphabet::default();
/// assert_eq!(latin.letters().len(), 26);
/// assert!(latin.contains('Q'));
///
/// let small: Alphabet = "ABC".parse().unwrap();
/// assert!(!small.contains('D'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

/// Error returned when building an [`Alphabet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AlphabetError {
    /// No letters were given.
    #[display("alphabet is empty")]
    Empty,
    /// A whitespace character was given.
    #[display("alphabet contains whitespace {letter:?}")]
    Whitespace {
        /// The offending character.
        letter: char,
    },
    /// A character that is not an uppercase letter was given, such as a
    /// lowercase letter, a digit or the `.` blank marker.
    #[display("alphabet contains {letter:?}, which is not an uppercase letter")]
    NotUppercase {
        /// The offending character.
        letter: char,
    },
    /// The same letter was given more than once.
    #[display("alphabet contains {letter:?} more than once")]
    Duplicate {
        /// The repeated letter.
        letter: char,
    },
}

impl Alphabet {
    /// The uppercase Latin letters `A` to `Z`.
    pub const LATIN: &'static str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    /// Creates an alphabet from the given letters, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError`] if `letters` is empty, contains whitespace or
    /// anything but uppercase letters, or repeats a letter.
    pub fn new<I>(letters: I) -> Result<Self, AlphabetError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut seen = HashSet::new();
        let mut collected = Vec::new();
        for letter in letters {
            if letter.is_whitespace() {
                return Err(AlphabetError::Whitespace { letter });
            }
            if !is_uppercase_letter(letter) {
                return Err(AlphabetError::NotUppercase { letter });
            }
            if !seen.insert(letter) {
                return Err(AlphabetError::Duplicate { letter });
            }
            collected.push(letter);
        }
        if collected.is_empty() {
            return Err(AlphabetError::Empty);
        }
        Ok(Self { letters: collected })
    }

    /// Returns the letters of this alphabet.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Returns `true` if `letter` belongs to this alphabet.
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }
}

fn is_uppercase_letter(letter: char) -> bool {
    letter.is_alphabetic() && letter.to_uppercase().eq([letter])
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            letters: Self::LATIN.chars().collect(),
        }
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_latin() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.letters().first(), Some(&'A'));
        assert_eq!(alphabet.letters().last(), Some(&'Z'));
        assert_eq!(alphabet, Alphabet::LATIN.parse().unwrap());
    }

    #[test]
    fn test_invalid_alphabets() {
        assert_eq!("".parse::<Alphabet>(), Err(AlphabetError::Empty));
        assert_eq!(
            "AB C".parse::<Alphabet>(),
            Err(AlphabetError::Whitespace { letter: ' ' })
        );
        assert_eq!(
            "ABCA".parse::<Alphabet>(),
            Err(AlphabetError::Duplicate { letter: 'A' })
        );
    }

    #[test]
    fn test_only_uppercase_letters_are_accepted() {
        for (letters, letter) in [
            ("abc", 'a'),
            ("ABc", 'c'),
            ("AB1", '1'),
            ("ABC.", '.'),
            ("_AB", '_'),
            ("Aß", 'ß'),
        ] {
            assert_eq!(
                letters.parse::<Alphabet>(),
                Err(AlphabetError::NotUppercase { letter }),
                "{letters:?}"
            );
        }
    }

    #[test]
    fn test_non_latin_letters() {
        let alphabet: Alphabet = "ÅÄÖ".parse().unwrap();
        assert_eq!(alphabet.letters(), &['Å', 'Ä', 'Ö']);
        assert!(alphabet.contains('Ä'));
        assert!(!alphabet.contains('A'));
    }
}
