//! Candidate store
//!
//! The answers a puzzle still allows, kept as indices into the corpus answer
//! list so each puzzle owns a small independent vector.

use super::constraints::{Constraints, Observation, is_consistent};
use crate::core::Word;
use crate::wordlists::Corpus;

/// Ordered set of surviving answers (corpus order is preserved)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateSet {
    indices: Vec<u32>,
}

impl CandidateSet {
    /// Every answer in the corpus
    ///
    /// # Panics
    /// Panics if the corpus holds more than `u32::MAX` answers.
    #[must_use]
    pub fn full(corpus: &Corpus) -> Self {
        let count = u32::try_from(corpus.answers().len()).expect("answer list fits in u32");
        Self {
            indices: (0..count).collect(),
        }
    }

    /// Recompute the survivors from the full answer list and a whole history
    #[must_use]
    pub fn filter(corpus: &Corpus, history: &[Observation]) -> Self {
        let constraints = Constraints::from_history(history);
        let mut set = Self::full(corpus);
        set.indices.retain(|&i| {
            let word = corpus.answer(i);
            constraints.admits(word) && is_consistent(word, history)
        });
        set
    }

    /// Survivors after one more observation
    ///
    /// Equivalent to [`CandidateSet::filter`] over the extended history, as long
    /// as `self` was produced from the earlier part of that history.
    #[must_use]
    pub fn refine(&self, corpus: &Corpus, observation: &Observation) -> Self {
        Self {
            indices: self
                .indices
                .iter()
                .copied()
                .filter(|&i| observation.admits(corpus.answer(i)))
                .collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Answer indices in corpus order
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Surviving words in corpus order
    pub fn words<'c>(&self, corpus: &'c Corpus) -> impl Iterator<Item = &'c Word> {
        self.indices.iter().map(move |&i| corpus.answer(i))
    }

    /// The only survivor, if exactly one remains
    #[must_use]
    pub fn single<'c>(&self, corpus: &'c Corpus) -> Option<&'c Word> {
        match self.indices.as_slice() {
            [only] => Some(corpus.answer(*only)),
            _ => None,
        }
    }

    /// Whether `word` is still a candidate
    #[must_use]
    pub fn contains(&self, corpus: &Corpus, word: &Word) -> bool {
        self.words(corpus).any(|w| w == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;
    use crate::wordlists::loader::words_from_slice;

    fn corpus() -> Corpus {
        Corpus::answers_only(words_from_slice(&[
            "crane", "slate", "irate", "crate", "grate", "erase", "speed", "theme",
        ]))
        .unwrap()
    }

    fn observe(guess: &str, answer: &str) -> Observation {
        let guess = Word::new(guess).unwrap();
        Observation::new(guess, Pattern::calculate(&guess, &Word::new(answer).unwrap()))
    }

    fn texts<'c>(set: &CandidateSet, corpus: &'c Corpus) -> Vec<&'c str> {
        set.words(corpus).map(Word::text).collect()
    }

    #[test]
    fn full_set_keeps_corpus_order() {
        let corpus = corpus();
        let set = CandidateSet::full(&corpus);
        assert_eq!(set.len(), 8);
        assert_eq!(texts(&set, &corpus)[..3], ["crane", "slate", "irate"]);
    }

    #[test]
    fn refine_keeps_only_matching_words() {
        let corpus = corpus();
        let observation = observe("crane", "grate");
        let set = CandidateSet::full(&corpus).refine(&corpus, &observation);

        assert!(set.contains(&corpus, &Word::new("grate").unwrap()));
        for word in set.words(&corpus) {
            assert!(observation.admits(word));
        }
        assert_eq!(texts(&set, &corpus), ["irate", "grate", "erase"]);
    }

    #[test]
    fn refine_is_idempotent() {
        let corpus = corpus();
        let observation = observe("slate", "crate");
        let once = CandidateSet::full(&corpus).refine(&corpus, &observation);
        let twice = once.refine(&corpus, &observation);
        assert_eq!(once, twice);
    }

    #[test]
    fn incremental_refine_equals_full_filter() {
        let corpus = corpus();
        for answer in corpus.answers() {
            let history = [observe("speed", answer.text()), observe("crane", answer.text())];

            let incremental = CandidateSet::full(&corpus)
                .refine(&corpus, &history[0])
                .refine(&corpus, &history[1]);
            let full = CandidateSet::filter(&corpus, &history);

            assert_eq!(incremental, full);
            assert!(full.contains(&corpus, answer));
        }
    }

    #[test]
    fn impossible_feedback_empties_the_set() {
        let corpus = corpus();
        let observation = Observation::new(Word::new("zzzzz").unwrap(), Pattern::PERFECT);
        assert!(CandidateSet::full(&corpus).refine(&corpus, &observation).is_empty());
    }

    #[test]
    fn single_reports_last_survivor() {
        let corpus = corpus();
        let set = CandidateSet::full(&corpus).refine(&corpus, &observe("theme", "theme"));
        assert_eq!(set.single(&corpus).map(Word::text), Some("theme"));
        assert_eq!(CandidateSet::full(&corpus).single(&corpus), None);
    }
}
