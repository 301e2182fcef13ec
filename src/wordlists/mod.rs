//! Word lists shared by every puzzle
//!
//! The corpus is loaded once, validated, and then lent read-only to the session.

pub mod loader;

use crate::core::Word;
use crate::solver::SolverError;
use rustc_hash::FxHashSet;

/// The two immutable word lists of a session
///
/// `answers` are the possible solutions, `guesses` the words that may be played.
/// Order matters: candidate sets keep answer order and tie-breaks use guess order.
#[derive(Debug, Clone)]
pub struct Corpus {
    answers: Vec<Word>,
    guesses: Vec<Word>,
}

impl Corpus {
    /// Build a corpus from separate answer and guess lists
    ///
    /// Repeated words are dropped from both lists, keeping the first occurrence.
    ///
    /// # Errors
    /// Returns `SolverError::EmptyAnswers` or `SolverError::EmptyCorpus` when
    /// either list is empty.
    pub fn new(answers: Vec<Word>, guesses: Vec<Word>) -> Result<Self, SolverError> {
        let answers = dedup(answers, "answer");
        let guesses = dedup(guesses, "guess");
        if answers.is_empty() {
            return Err(SolverError::EmptyAnswers);
        }
        if guesses.is_empty() {
            return Err(SolverError::EmptyCorpus);
        }

        let allowed: FxHashSet<&Word> = guesses.iter().collect();
        let unguessable = answers.iter().filter(|a| !allowed.contains(a)).count();
        if unguessable > 0 {
            log::warn!("{unguessable} answer words are missing from the guess list");
        }

        Ok(Self { answers, guesses })
    }

    /// Use the answers as the guess list too
    ///
    /// # Errors
    /// Returns `SolverError::EmptyAnswers` if `answers` is empty.
    pub fn answers_only(answers: Vec<Word>) -> Result<Self, SolverError> {
        let guesses = answers.clone();
        Self::new(answers, guesses)
    }

    /// Possible solutions, in corpus order
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Allowed guesses, in corpus order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Answer at an index of a candidate set
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[inline]
    #[must_use]
    pub fn answer(&self, index: u32) -> &Word {
        &self.answers[index as usize]
    }
}

/// Drop repeated words, keeping the first of each in list order
fn dedup(words: Vec<Word>, list: &str) -> Vec<Word> {
    let before = words.len();
    let mut seen = FxHashSet::default();
    let unique: Vec<Word> = words.into_iter().filter(|word| seen.insert(*word)).collect();

    let dropped = before - unique.len();
    if dropped > 0 {
        log::warn!("dropped {dropped} repeated words from the {list} list");
    }
    unique
}
