//! Shannon entropy calculation for feedback patterns
//!
//! Given a guess and a candidate set, computes the expected information gain.

use crate::core::{Pattern, Word};
use crate::solver::candidates::CandidateSet;
use crate::solver::oracle::{PatternOracle, compute_pattern};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess against one candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct feedback patterns the guess can produce
    pub buckets: usize,
}

/// Entropy of `guess` over `candidates`, in bits
///
/// Returns exactly `0.0` when at most one candidate remains.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the share of candidates that would show pattern x.
///
/// # Examples
/// ```
/// use sedecordle_solver::core::Word;
/// use sedecordle_solver::solver::entropy::score;
///
/// let guess = Word::new("slate").unwrap();
/// let candidates = [Word::new("slate").unwrap(), Word::new("crony").unwrap()];
/// let refs: Vec<&Word> = candidates.iter().collect();
///
/// assert!((score(&guess, &refs) - 1.0).abs() < 1e-12);
/// assert_eq!(score(&guess, &refs[..1]), 0.0);
/// ```
#[must_use]
pub fn score(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.len() <= 1 {
        return 0.0;
    }
    shannon_entropy(group_by_pattern(guess, candidates).into_values())
}

/// Entropy of the guess at `guess_index` over a puzzle's candidate set
///
/// Same value as [`score`], using the oracle's pattern table.
#[must_use]
pub fn score_candidates(
    oracle: &PatternOracle<'_>,
    guess_index: usize,
    candidates: &CandidateSet,
) -> f64 {
    if candidates.len() <= 1 {
        return 0.0;
    }

    let mut counts = [0usize; Pattern::COUNT];
    for &answer in candidates.indices() {
        counts[usize::from(oracle.pattern(guess_index, answer).value())] += 1;
    }

    shannon_entropy(counts)
}

/// Group candidates by the pattern they produce with the guess
fn group_by_pattern(guess: &Word, candidates: &[&Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let pattern = compute_pattern(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Partition candidates into buckets keyed by the pattern they would show
#[must_use]
pub fn partition<'w>(
    guess: &Word,
    candidates: &[&'w Word],
) -> FxHashMap<Pattern, Vec<&'w Word>> {
    let mut buckets: FxHashMap<Pattern, Vec<&'w Word>> = FxHashMap::default();
    for &candidate in candidates {
        buckets
            .entry(compute_pattern(guess, candidate))
            .or_default()
            .push(candidate);
    }
    buckets
}

/// Calculate Shannon entropy from bucket sizes
///
/// H = -Σ p * log₂(p)
///
/// Empty buckets are ignored. Sizes are summed smallest first, so two
/// partitions with the same multiset of sizes give bit-identical results.
///
/// # Examples
/// ```
/// use sedecordle_solver::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy([25, 25, 25, 25]);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<I>(bucket_sizes: I) -> f64
where
    I: IntoIterator<Item = usize>,
{
    let mut sizes: Vec<usize> = bucket_sizes.into_iter().filter(|&k| k > 0).collect();
    let total: usize = sizes.iter().sum();

    if total == 0 {
        return 0.0;
    }

    sizes.sort_unstable();
    let total = total as f64;

    // Start from +0.0: a single bucket contributes -0.0
    sizes.into_iter().fold(0.0, |entropy, count| {
        let p = count as f64 / total;
        entropy - p * p.log2()
    })
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, max partition size and bucket count.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            buckets: 0,
        };
    }

    let counts = group_by_pattern(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = counts
        .values()
        .map(|&size| {
            let p = size as f64 / total;
            p * size as f64
        })
        .sum();

    GuessMetrics {
        entropy: score(guess, candidates),
        expected_remaining,
        max_partition: counts.values().copied().max().unwrap_or(0),
        buckets: counts.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Corpus;
    use crate::wordlists::loader::words_from_slice;

    const WORDS: &[&str] = &[
        "crane", "slate", "irate", "crate", "grate", "trace", "raise", "erase", "speed",
        "theme", "geese", "sassy", "floor", "robot", "hello",
    ];

    fn refs(words: &[Word]) -> Vec<&Word> {
        words.iter().collect()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 patterns, each appears once = log2(4) = 2 bits
        assert!((shannon_entropy([1, 1, 1, 1]) - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        assert_eq!(shannon_entropy([10]).to_bits(), 0.0f64.to_bits());
        assert_eq!(format!("{:.3}", shannon_entropy([3])), "0.000");
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        assert!(shannon_entropy([25, 25, 25, 25]) > shannon_entropy([97, 1, 1, 1]));
    }

    #[test]
    fn shannon_entropy_empty() {
        assert!(shannon_entropy(Vec::new()).abs() < f64::EPSILON);
        assert!(shannon_entropy([0, 0]).abs() < f64::EPSILON);
    }

    #[test]
    fn shannon_entropy_ignores_bucket_order() {
        let a = shannon_entropy([7, 1, 3, 2, 9]);
        let b = shannon_entropy([9, 3, 2, 7, 1]);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn score_is_zero_for_trivial_sets() {
        let words = words_from_slice(&["crane", "slate"]);
        let guess = words[0];
        assert!(score(&guess, &[]).abs() < f64::EPSILON);
        assert_eq!(score(&guess, &[&words[1]]).to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn score_all_same_pattern_is_zero() {
        let guess = Word::new("zzzzz").unwrap();
        let words = words_from_slice(&["aaaaa", "bbbbb", "ccccc"]);
        assert!(score(&guess, &refs(&words)).abs() < 0.001);
    }

    #[test]
    fn score_perfect_split_is_one_bit() {
        let guess = Word::new("slate").unwrap();
        let words = words_from_slice(&["slate", "zzzzz"]);
        assert!((score(&guess, &refs(&words)) - 1.0).abs() < 0.001);
    }

    #[test]
    fn score_is_bounded_by_log_of_candidates() {
        let words = words_from_slice(WORDS);
        for guess in &words {
            let entropy = score(guess, &refs(&words));
            assert!(entropy >= 0.0);
            assert!(entropy <= (words.len() as f64).log2() + 1e-12);
        }
    }

    #[test]
    fn removing_a_candidate_never_adds_information() {
        // n·H = n·log2(n) - Σ k·log2(k) can only shrink when a candidate goes;
        // so can the number of buckets and the log2(n) ceiling.
        let words = words_from_slice(WORDS);
        let all = refs(&words);

        for guess in &words {
            let full_info = all.len() as f64 * score(guess, &all);
            let full_buckets = partition(guess, &all).len();

            for skip in 0..all.len() {
                let mut fewer = all.clone();
                fewer.remove(skip);
                let info = fewer.len() as f64 * score(guess, &fewer);

                assert!(info <= full_info + 1e-9, "{guess} without {}", all[skip]);
                assert!(partition(guess, &fewer).len() <= full_buckets);
            }
        }
    }

    #[test]
    fn normalized_entropy_can_rise_when_a_candidate_goes() {
        // {2, 1} -> {1, 1}: 0.918 bits -> 1 bit
        let guess = Word::new("slate").unwrap();
        let words = words_from_slice(&["crony", "bumpy", "slate"]);
        let before = score(&guess, &refs(&words));
        let after = score(&guess, &refs(&words[1..]));
        assert!(after > before);
    }

    #[test]
    fn partition_groups_by_pattern() {
        let guess = Word::new("crane").unwrap();
        let words = words_from_slice(&["slate", "crate", "irate", "grate"]);
        let buckets = partition(&guess, &refs(&words));

        assert_eq!(buckets.values().map(Vec::len).sum::<usize>(), 4);
        for (pattern, members) in &buckets {
            for member in members {
                assert_eq!(compute_pattern(&guess, member), *pattern);
            }
        }
        // IRATE and GRATE both show ACCAC
        assert_eq!(buckets.len(), 3);
    }

    #[test]
    fn indexed_score_matches_word_score() {
        let corpus = Corpus::answers_only(words_from_slice(WORDS)).unwrap();
        let candidates = crate::solver::candidates::CandidateSet::full(&corpus);
        let cached = PatternOracle::new(&corpus, usize::MAX);
        let uncached = PatternOracle::new(&corpus, 0);
        let all = refs(corpus.answers());

        for (index, guess) in corpus.guesses().iter().enumerate() {
            let expected = score(guess, &all);
            let from_table = score_candidates(&cached, index, &candidates);
            let computed = score_candidates(&uncached, index, &candidates);
            assert_eq!(from_table.to_bits(), expected.to_bits());
            assert_eq!(computed.to_bits(), expected.to_bits());
        }
    }

    #[test]
    fn metrics_are_consistent() {
        let guess = Word::new("crane").unwrap();
        let words = words_from_slice(&["slate", "crate", "irate", "grate"]);
        let metrics = calculate_metrics(&guess, &refs(&words));

        assert_eq!(metrics.buckets, 3);
        assert_eq!(metrics.max_partition, 2);
        // (1 + 1 + 4) / 4
        assert!((metrics.expected_remaining - 1.5).abs() < 1e-12);
        assert!((metrics.entropy - 1.5).abs() < 1e-12);
    }

    #[test]
    fn metrics_empty_candidates() {
        let guess = Word::new("crane").unwrap();
        let metrics = calculate_metrics(&guess, &[]);
        assert_eq!(metrics.buckets, 0);
        assert!(metrics.entropy.abs() < f64::EPSILON);
    }
}
