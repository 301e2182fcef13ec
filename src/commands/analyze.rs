//! Word analysis command
//!
//! Analyzes the information a specific guess would give, per puzzle and summed
//! over the active puzzles of a session.

use crate::core::Word;
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use crate::solver::{Session, SolverError};

/// Metrics of the guess against one puzzle
pub struct PuzzleAnalysis {
    pub puzzle: usize,
    pub candidates: usize,
    pub metrics: GuessMetrics,
}

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    /// Sum of the per-puzzle entropies, in bits
    pub aggregate: f64,
    pub in_guess_list: bool,
    pub puzzles: Vec<PuzzleAnalysis>,
}

impl AnalysisResult {
    /// Number of candidates left on average over the analyzed puzzles
    #[must_use]
    pub fn mean_expected_remaining(&self) -> f64 {
        if self.puzzles.is_empty() {
            return 0.0;
        }
        self.puzzles
            .iter()
            .map(|p| p.metrics.expected_remaining)
            .sum::<f64>()
            / self.puzzles.len() as f64
    }
}

/// Analyze `word` against every active puzzle of `session`
///
/// # Errors
///
/// Returns an error if the word is not five letters A-Z.
pub fn analyze_word(word: &str, session: &Session<'_>) -> Result<AnalysisResult, SolverError> {
    let word = Word::new(word)?;
    let corpus = session.corpus();

    let in_guess_list = corpus.guesses().contains(&word);
    if !in_guess_list {
        log::warn!("{word} is not in the guess list");
    }

    let puzzles: Vec<PuzzleAnalysis> = session
        .active_puzzles()
        .map(|puzzle| {
            let candidates: Vec<&Word> = puzzle.candidates().words(corpus).collect();
            PuzzleAnalysis {
                puzzle: puzzle.id(),
                candidates: candidates.len(),
                metrics: calculate_metrics(&word, &candidates),
            }
        })
        .collect();

    Ok(AnalysisResult {
        word,
        aggregate: session.aggregate_score(&word),
        in_guess_list,
        puzzles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InputShapeError;
    use crate::solver::EngineConfig;
    use crate::wordlists::Corpus;
    use crate::wordlists::loader::words_from_slice;

    fn corpus() -> Corpus {
        Corpus::answers_only(words_from_slice(&[
            "crane", "slate", "irate", "crate", "grate", "trace", "raise", "erase",
        ]))
        .unwrap()
    }

    #[test]
    fn analyze_valid_word() {
        let corpus = corpus();
        let session = Session::new(&corpus, EngineConfig::default());

        let result = analyze_word("Slate", &session).unwrap();

        assert_eq!(result.word.text(), "slate");
        assert!(result.in_guess_list);
        assert_eq!(result.puzzles.len(), 16);
        assert!(result.puzzles.iter().all(|p| p.candidates == 8));

        let per_puzzle = result.puzzles[0].metrics.entropy;
        assert!(per_puzzle > 0.0);
        assert!((result.aggregate - 16.0 * per_puzzle).abs() < 1e-9);
    }

    #[test]
    fn analyze_unknown_word_still_scores() {
        let corpus = corpus();
        let session = Session::new(&corpus, EngineConfig::default().with_puzzle_count(2));

        let result = analyze_word("zzzzz", &session).unwrap();
        assert!(!result.in_guess_list);
        assert!(result.aggregate.abs() < f64::EPSILON);
        assert!((result.mean_expected_remaining() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn analyze_invalid_word() {
        let corpus = corpus();
        let session = Session::new(&corpus, EngineConfig::default());

        assert_eq!(
            analyze_word("cat", &session).err(),
            Some(SolverError::InputShape(InputShapeError::WordLength(3)))
        );
    }

    #[test]
    fn entropy_properties() {
        let corpus = corpus();
        let session = Session::new(&corpus, EngineConfig::default().with_puzzle_count(1));

        let result = analyze_word("trace", &session).unwrap();
        let metrics = result.puzzles[0].metrics;

        // Entropy should be bounded
        assert!(metrics.entropy >= 0.0);
        assert!(metrics.entropy <= 8f64.log2());

        // Expected remaining should be sensible
        assert!(metrics.expected_remaining >= 1.0);
        assert!(metrics.expected_remaining <= 8.0);
    }
}
