//! Puzzle word representation
//!
//! A Word is a fixed 5-letter value over `a..=z`, stored as bytes so that it is `Copy`
//! and cheap to compare in the scoring loop.

use super::InputShapeError;
use std::fmt;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Size of the alphabet (`a..=z`)
pub const ALPHABET_SIZE: usize = 26;

/// A 5-letter puzzle word
///
/// Input is case-insensitive; the word is stored lowercase and displayed uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    chars: [u8; WORD_LENGTH],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `InputShapeError` if:
    /// - Length is not exactly 5
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use sedecordle_solver::core::Word;
    ///
    /// let word = Word::new("Speed").unwrap();
    /// assert_eq!(word.text(), "speed");
    /// assert_eq!(word.to_string(), "SPEED");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, InputShapeError> {
        let text = text.trim();
        let length = text.chars().count();
        if length != WORD_LENGTH {
            return Err(InputShapeError::WordLength(length));
        }

        let mut chars = [0u8; WORD_LENGTH];
        for (slot, ch) in chars.iter_mut().zip(text.chars()) {
            if !ch.is_ascii_alphabetic() {
                return Err(InputShapeError::InvalidLetter(ch));
            }
            *slot = ch.to_ascii_lowercase() as u8;
        }

        Ok(Self { chars })
    }

    /// Get the word as a lowercase string slice
    ///
    /// # Panics
    /// Will not panic - construction only admits ASCII letters.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.chars).expect("words hold ASCII letters only")
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Count of each letter, indexed by `letter - b'a'`
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &ch in &self.chars {
            counts[letter_index(ch)] += 1;
        }
        counts
    }
}

/// Index of a lowercase letter into a 26-slot table
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &ch in &self.chars {
            write!(f, "{}", ch.to_ascii_uppercase() as char)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Word {
    type Err = InputShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
