//! Pattern oracle
//!
//! Answers "what feedback does guess G give against answer A" for the scoring
//! loop. A prefix of the guess list is precomputed into a dense table whose size
//! is fixed up front; guesses beyond the prefix are computed on demand.

use crate::core::{Pattern, Word};
use crate::wordlists::Corpus;
use rayon::prelude::*;
use std::time::Instant;

/// Feedback pattern for `guess` played against `target`
///
/// Pure and total; this is the single definition of feedback every other part
/// of the engine agrees with.
#[inline]
#[must_use]
pub fn compute_pattern(guess: &Word, target: &Word) -> Pattern {
    Pattern::calculate(guess, target)
}

/// Pattern lookups over a corpus, backed by a bounded precomputed table
///
/// The table holds one byte per (guess, answer) cell for the first `rows`
/// guesses, where `rows * answers <= max_cells`. It is filled once at
/// construction and never grows afterwards.
pub struct PatternOracle<'a> {
    corpus: &'a Corpus,
    rows: usize,
    table: Vec<u8>,
}

impl<'a> PatternOracle<'a> {
    /// Build an oracle, caching as many guess rows as fit in `max_cells`
    #[must_use]
    pub fn new(corpus: &'a Corpus, max_cells: usize) -> Self {
        let answers = corpus.answers();
        let rows = (max_cells / answers.len().max(1)).min(corpus.guesses().len());

        let start = Instant::now();
        let table: Vec<u8> = corpus.guesses()[..rows]
            .par_iter()
            .flat_map_iter(|guess| {
                answers
                    .iter()
                    .map(move |answer| compute_pattern(guess, answer).value())
            })
            .collect();

        log::debug!(
            "pattern table: {rows}/{} guess rows, {} cells in {:.2}s",
            corpus.guesses().len(),
            table.len(),
            start.elapsed().as_secs_f64()
        );

        Self {
            corpus,
            rows,
            table,
        }
    }

    /// The corpus this oracle answers for
    #[inline]
    #[must_use]
    pub const fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    /// Number of guesses whose patterns are precomputed
    #[inline]
    #[must_use]
    pub const fn cached_rows(&self) -> usize {
        self.rows
    }

    /// Pattern for the guess at `guess_index` against the answer at `answer_index`
    ///
    /// # Panics
    /// Panics if either index is out of range for the corpus.
    #[inline]
    #[must_use]
    pub fn pattern(&self, guess_index: usize, answer_index: u32) -> Pattern {
        if guess_index < self.rows {
            let width = self.corpus.answers().len();
            Pattern::new(self.table[guess_index * width + answer_index as usize])
        } else {
            compute_pattern(
                &self.corpus.guesses()[guess_index],
                self.corpus.answer(answer_index),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn corpus() -> Corpus {
        Corpus::new(
            words_from_slice(&["erase", "slate", "crane", "speed"]),
            words_from_slice(&["speed", "crane", "zzzzz", "erase", "slate"]),
        )
        .unwrap()
    }

    #[test]
    fn compute_pattern_matches_calculate() {
        let guess = Word::new("speed").unwrap();
        let target = Word::new("erase").unwrap();
        assert_eq!(compute_pattern(&guess, &target).value(), 37);
    }

    #[test]
    fn table_is_bounded_by_budget() {
        let corpus = corpus();
        let oracle = PatternOracle::new(&corpus, 9);
        // 9 cells / 4 answers = 2 rows
        assert_eq!(oracle.cached_rows(), 2);

        let unbounded = PatternOracle::new(&corpus, usize::MAX);
        assert_eq!(unbounded.cached_rows(), 5);

        let disabled = PatternOracle::new(&corpus, 0);
        assert_eq!(disabled.cached_rows(), 0);
    }

    #[test]
    fn cached_and_computed_lookups_agree() {
        let corpus = corpus();
        let partial = PatternOracle::new(&corpus, 8);
        let none = PatternOracle::new(&corpus, 0);

        for (g, guess) in corpus.guesses().iter().enumerate() {
            for (a, answer) in corpus.answers().iter().enumerate() {
                let expected = compute_pattern(guess, answer);
                let a = u32::try_from(a).unwrap();
                assert_eq!(partial.pattern(g, a), expected);
                assert_eq!(none.pattern(g, a), expected);
            }
        }
    }
}
