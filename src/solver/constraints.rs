//! Constraint model
//!
//! Letter facts implied by a puzzle's feedback history. The facts are always
//! rebuilt from the whole history; the replay check in [`is_consistent`] is the
//! authority and the facts only serve as a fast pre-filter and a summary.

use crate::core::{ALPHABET_SIZE, Feedback, Pattern, WORD_LENGTH, Word, letter_index};
use std::fmt;

/// One round's outcome for one puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub guess: Word,
    pub pattern: Pattern,
}

impl Observation {
    #[must_use]
    pub const fn new(guess: Word, pattern: Pattern) -> Self {
        Self { guess, pattern }
    }

    /// Whether `word` would have produced this observation
    #[inline]
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        Pattern::calculate(&self.guess, word) == self.pattern
    }
}

/// True iff replaying every historical guess against `word` reproduces the recorded pattern
#[must_use]
pub fn is_consistent(word: &Word, history: &[Observation]) -> bool {
    history.iter().all(|observation| observation.admits(word))
}

/// Letter facts derived from a feedback history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    /// Letter known to sit at each position
    fixed: [Option<u8>; WORD_LENGTH],
    /// Bitmask of letters ruled out at each position
    excluded: [u32; WORD_LENGTH],
    min_count: [u8; ALPHABET_SIZE],
    max_count: [u8; ALPHABET_SIZE],
    /// Two different letters were reported Correct at one position
    clashing: bool,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            fixed: [None; WORD_LENGTH],
            excluded: [0; WORD_LENGTH],
            min_count: [0; ALPHABET_SIZE],
            max_count: [WORD_LENGTH as u8; ALPHABET_SIZE],
            clashing: false,
        }
    }
}

const fn bit(letter: u8) -> u32 {
    1 << letter_index(letter)
}

impl Constraints {
    /// Derive the facts implied by a whole history
    #[must_use]
    pub fn from_history(history: &[Observation]) -> Self {
        let mut constraints = Self::default();
        for observation in history {
            constraints.absorb(observation);
        }
        constraints
    }

    fn absorb(&mut self, observation: &Observation) {
        let guess = observation.guess.chars();
        let mut marked = [0u8; ALPHABET_SIZE];
        let mut capped = [false; ALPHABET_SIZE];

        for (i, symbol) in observation.pattern.symbols().into_iter().enumerate() {
            let letter = guess[i];
            match symbol {
                Feedback::Correct => {
                    if self.fixed[i].is_some_and(|known| known != letter) {
                        self.clashing = true;
                    }
                    self.fixed[i] = Some(letter);
                    marked[letter_index(letter)] += 1;
                }
                Feedback::Present => {
                    self.excluded[i] |= bit(letter);
                    marked[letter_index(letter)] += 1;
                }
                Feedback::Absent => {
                    self.excluded[i] |= bit(letter);
                    capped[letter_index(letter)] = true;
                }
            }
        }

        for l in 0..ALPHABET_SIZE {
            self.min_count[l] = self.min_count[l].max(marked[l]);
            if capped[l] {
                self.max_count[l] = self.max_count[l].min(marked[l]);
            }
        }
    }

    /// Cheap check that `word` agrees with every fact
    ///
    /// For histories of genuine feedback this agrees exactly with [`is_consistent`].
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        for (i, &ch) in word.chars().iter().enumerate() {
            if self.fixed[i].is_some_and(|f| f != ch) || self.excluded[i] & bit(ch) != 0 {
                return false;
            }
        }

        let counts = word.letter_counts();
        (0..ALPHABET_SIZE)
            .all(|l| counts[l] >= self.min_count[l] && counts[l] <= self.max_count[l])
    }

    /// Facts that no word can satisfy (a letter needed more often than allowed,
    /// or too many letters required overall)
    #[must_use]
    pub fn is_contradictory(&self) -> bool {
        let required: usize = self.min_count.iter().map(|&c| usize::from(c)).sum();
        self.clashing
            || required > WORD_LENGTH
            || (0..ALPHABET_SIZE).any(|l| self.min_count[l] > self.max_count[l])
            || self
                .fixed
                .iter()
                .zip(&self.excluded)
                .any(|(f, &mask)| f.is_some_and(|ch| mask & bit(ch) != 0))
    }

    /// Letter fixed at `position`, if known
    #[must_use]
    pub const fn fixed_at(&self, position: usize) -> Option<u8> {
        self.fixed[position]
    }

    /// Minimum number of copies of `letter` the answer must contain
    #[must_use]
    pub const fn min_count(&self, letter: u8) -> u8 {
        self.min_count[letter_index(letter)]
    }

    /// Exact number of copies of `letter`, when feedback pinned it down
    #[must_use]
    pub const fn exact_count(&self, letter: u8) -> Option<u8> {
        let l = letter_index(letter);
        if self.max_count[l] < WORD_LENGTH as u8 && self.max_count[l] == self.min_count[l] {
            Some(self.max_count[l])
        } else {
            None
        }
    }

    /// Whether `letter` is ruled out at `position`
    #[must_use]
    pub const fn is_excluded(&self, letter: u8, position: usize) -> bool {
        self.excluded[position] & bit(letter) != 0
    }

    /// Letters known to be in the answer, alphabetically
    #[must_use]
    pub fn required_letters(&self) -> Vec<u8> {
        (b'a'..=b'z')
            .filter(|&l| self.min_count[letter_index(l)] > 0)
            .collect()
    }

    /// Letters known to be absent, alphabetically
    #[must_use]
    pub fn absent_letters(&self) -> Vec<u8> {
        (b'a'..=b'z')
            .filter(|&l| self.max_count[letter_index(l)] == 0)
            .collect()
    }
}

/// Compact summary such as `S?A?E +AERS -BCT`
impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.fixed {
            match slot {
                Some(ch) => write!(f, "{}", ch.to_ascii_uppercase() as char)?,
                None => write!(f, "?")?,
            }
        }

        let required = self.required_letters();
        if !required.is_empty() {
            write!(f, " +")?;
            for l in required {
                write!(f, "{}", l.to_ascii_uppercase() as char)?;
                let count = self.min_count(l);
                if count > 1 {
                    write!(f, "{count}")?;
                }
            }
        }

        let absent = self.absent_letters();
        if !absent.is_empty() {
            write!(f, " -")?;
            for l in absent {
                write!(f, "{}", l.to_ascii_uppercase() as char)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn observe(guess: &str, answer: &str) -> Observation {
        let guess = word(guess);
        Observation::new(guess, Pattern::calculate(&guess, &word(answer)))
    }

    const WORDS: &[&str] = &[
        "erase", "speed", "slate", "crane", "eerie", "theme", "geese", "sassy", "essay",
        "floor", "robot", "hello", "llama", "abbey", "kebab", "lever", "revel", "mamma",
    ];

    #[test]
    fn empty_history_admits_everything() {
        let constraints = Constraints::from_history(&[]);
        for w in WORDS {
            assert!(constraints.admits(&word(w)));
            assert!(is_consistent(&word(w), &[]));
        }
        assert_eq!(constraints.to_string(), "?????");
    }

    #[test]
    fn duplicate_letter_facts() {
        // SPEED vs ERASE: E present twice, no P or D, S not at 0
        let constraints = Constraints::from_history(&[observe("speed", "erase")]);

        assert_eq!(constraints.min_count(b'e'), 2);
        assert_eq!(constraints.min_count(b's'), 1);
        assert_eq!(constraints.exact_count(b'p'), Some(0));
        assert_eq!(constraints.exact_count(b'e'), None);
        assert!(constraints.is_excluded(b's', 0));
        assert!(constraints.is_excluded(b'e', 2));
        assert!(!constraints.is_excluded(b'e', 0));
        assert!(constraints.admits(&word("erase")));
        assert!(!constraints.admits(&word("slate")));
        assert_eq!(constraints.to_string(), "????? +E2S -DP");
    }

    #[test]
    fn absent_duplicate_pins_exact_count() {
        // EERIE vs THEME: one E present, second E absent, last E correct -> exactly two E's
        let constraints = Constraints::from_history(&[observe("eerie", "theme")]);

        assert_eq!(constraints.exact_count(b'e'), Some(2));
        assert_eq!(constraints.fixed_at(4), Some(b'e'));
        assert!(constraints.admits(&word("theme")));
        assert!(!constraints.admits(&word("geese")));
    }

    #[test]
    fn facts_agree_with_replay() {
        for &answer in WORDS {
            for &first in WORDS {
                for &second in &["speed", "lever", "mamma"] {
                    let history = [observe(first, answer), observe(second, answer)];
                    let constraints = Constraints::from_history(&history);
                    assert!(!constraints.is_contradictory());

                    for &candidate in WORDS {
                        let candidate = word(candidate);
                        assert_eq!(
                            constraints.admits(&candidate),
                            is_consistent(&candidate, &history),
                            "answer {answer}, guesses {first}/{second}, candidate {candidate}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn rebuilt_facts_do_not_depend_on_order() {
        let a = observe("crane", "slate");
        let b = observe("speed", "slate");
        assert_eq!(
            Constraints::from_history(&[a, b]),
            Constraints::from_history(&[b, a])
        );
    }

    #[test]
    fn conflicting_feedback_is_contradictory() {
        let guess = word("crane");
        let history = [
            Observation::new(guess, Pattern::PERFECT),
            Observation::new(guess, Pattern::NOTHING),
        ];
        let constraints = Constraints::from_history(&history);

        assert!(constraints.is_contradictory());
        assert!(WORDS.iter().all(|w| !constraints.admits(&word(w))));
    }

    #[test]
    fn two_letters_fixed_at_one_position_is_contradictory() {
        let history = [
            Observation::new(word("crane"), Pattern::parse("CAAAA").unwrap()),
            Observation::new(word("slate"), Pattern::parse("CAAAA").unwrap()),
        ];
        let constraints = Constraints::from_history(&history);

        assert!(constraints.is_contradictory());
        assert!(!Constraints::from_history(&history[..1]).is_contradictory());
        assert!(WORDS.iter().all(|w| !is_consistent(&word(w), &history)));
    }
}
