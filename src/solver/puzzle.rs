//! Per-puzzle state
//!
//! Each of the sixteen boards owns its history and candidate set; nothing here
//! is shared between boards.

use super::SolverError;
use super::candidates::CandidateSet;
use super::constraints::{Constraints, Observation};
use crate::core::{InputShapeError, Pattern, Word};
use crate::wordlists::Corpus;
use std::fmt;

/// Lifecycle of a puzzle; only ever moves from `Active` to `Solved`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Solved,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Solved => write!(f, "solved"),
        }
    }
}

/// What the caller reports for one puzzle after a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// The feedback shown on the board
    Pattern(Pattern),
    /// The board was solved by this guess
    Solved,
}

impl std::str::FromStr for Response {
    type Err = InputShapeError;

    /// Accepts `solved` (any case) or any pattern notation
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("solved") {
            Ok(Self::Solved)
        } else {
            Pattern::parse(s).map(Self::Pattern)
        }
    }
}

impl From<Pattern> for Response {
    fn from(pattern: Pattern) -> Self {
        Self::Pattern(pattern)
    }
}

/// One puzzle board
#[derive(Debug, Clone)]
pub struct PuzzleState {
    id: usize,
    candidates: CandidateSet,
    status: Status,
    history: Vec<Observation>,
}

impl PuzzleState {
    /// A fresh, active puzzle whose candidates are all the corpus answers
    #[must_use]
    pub fn new(id: usize, corpus: &Corpus) -> Self {
        Self {
            id,
            candidates: CandidateSet::full(corpus),
            status: Status::Active,
            history: Vec::new(),
        }
    }

    /// 1-based puzzle number
    #[inline]
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Observations in the order they were applied
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Observation] {
        &self.history
    }

    /// Number of answers still possible
    #[inline]
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    /// Letter facts implied by this puzzle's history
    #[must_use]
    pub fn constraints(&self) -> Constraints {
        Constraints::from_history(&self.history)
    }

    /// The answer, once the puzzle is solved by a corpus word
    #[must_use]
    pub fn solution<'c>(&self, corpus: &'c Corpus) -> Option<&'c Word> {
        match self.status {
            Status::Solved => self.candidates.single(corpus),
            Status::Active => None,
        }
    }

    /// Recompute the candidates from the full answer list and history
    ///
    /// Always equals [`PuzzleState::candidates`]: `apply` only records
    /// observations that leave an answer standing, except a trusted `Solved`.
    #[must_use]
    pub fn filter(&self, corpus: &Corpus) -> CandidateSet {
        CandidateSet::filter(corpus, &self.history)
    }

    /// Apply one round's response for this puzzle
    ///
    /// A pattern that leaves no candidate is rejected and the puzzle is left
    /// untouched. An explicit `Solved` is trusted even when the guess is not in
    /// the answer list; the puzzle then ends with no candidates.
    ///
    /// # Errors
    /// Returns `SolverError::PuzzleAlreadySolved` or `SolverError::InconsistentFeedback`.
    pub fn apply(
        &mut self,
        corpus: &Corpus,
        guess: Word,
        response: Response,
    ) -> Result<(), SolverError> {
        if self.status == Status::Solved {
            return Err(SolverError::PuzzleAlreadySolved(self.id));
        }

        let pattern = match response {
            Response::Pattern(pattern) => pattern,
            Response::Solved => Pattern::PERFECT,
        };
        let observation = Observation::new(guess, pattern);
        let refined = self.candidates.refine(corpus, &observation);

        if refined.is_empty() {
            if response != Response::Solved {
                return Err(SolverError::InconsistentFeedback {
                    puzzle: self.id,
                    guess,
                    pattern,
                });
            }
            log::warn!("puzzle {} solved by {guess}, which is not a known answer", self.id);
        }

        self.history.push(observation);
        self.candidates = refined;

        if pattern.is_perfect() {
            self.status = Status::Solved;
            log::info!("puzzle {} solved by {guess}", self.id);
        } else {
            log::debug!(
                "puzzle {}: {guess} {pattern} leaves {}",
                self.id,
                self.candidates.len()
            );
        }

        Ok(())
    }
}
