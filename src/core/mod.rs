//! Core domain types for the puzzles
//!
//! This module contains the fundamental value types shared by all sixteen boards.
//! Everything here is pure and dependency-free.

mod pattern;
mod word;

pub use pattern::{Feedback, Pattern};
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};

use std::fmt;

/// A word or feedback pattern that does not have the required shape
///
/// Shape errors are caught before anything reaches a puzzle's history; the
/// caller has to resupply the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShapeError {
    /// Word does not have exactly five letters
    WordLength(usize),
    /// Word contains something other than `a..=z`
    InvalidLetter(char),
    /// Pattern does not have exactly five symbols
    PatternLength(usize),
    /// Pattern contains an unknown feedback symbol
    InvalidSymbol(char),
}

impl fmt::Display for InputShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordLength(len) => write!(f, "word must be exactly 5 letters, got {len}"),
            Self::InvalidLetter(ch) => write!(f, "word contains invalid character '{ch}'"),
            Self::PatternLength(len) => {
                write!(f, "feedback must be exactly 5 symbols, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "unknown feedback symbol '{ch}' (use C/P/A)")
            }
        }
    }
}

impl std::error::Error for InputShapeError {}
