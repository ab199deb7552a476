use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines the random choices of one generation run.
///
/// Seeds are displayed and parsed as 64 lowercase hexadecimal digits, so a puzzle
/// can be regenerated from the seed printed alongside it.
///
/// # Examples
///
/// ```
/// use wordsearch_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("fruits");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes of this seed.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Draws a fresh seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from an arbitrary phrase by hashing it with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Derives the seed of the `index`-th puzzle of a batch.
    ///
    /// Each derived seed is independent of the others, so puzzles of a batch can be
    /// generated in any order (or in parallel) and still be reproducible.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch_generator::PuzzleSeed;
    ///
    /// let base = PuzzleSeed::from_phrase("book");
    /// assert_eq!(base.derive(3), base.derive(3));
    /// assert_ne!(base.derive(0), base.derive(1));
    /// ```
    #[must_use]
    pub fn derive(&self, index: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(index.to_le_bytes());
        Self(hasher.finalize().into())
    }

    /// Creates the random generator driven by this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string does not have exactly 64 characters.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// The string contains a character that is not a hex digit.
    #[display("invalid hex digit {digit:?} at position {index}")]
    InvalidDigit {
        /// Character index of the offending digit.
        index: usize,
        /// The offending character.
        digit: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength { len });
        }

        let nibbles = s
            .chars()
            .enumerate()
            .map(|(index, digit)| {
                digit
                    .to_digit(16)
                    .and_then(|d| u8::try_from(d).ok())
                    .ok_or(ParseSeedError::InvalidDigit { index, digit })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(nibbles.chunks_exact(2)) {
            *byte = (pair[0] << 4) | pair[1];
        }
        Ok(Self(bytes))
    }
}
