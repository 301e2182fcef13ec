//! Aggregate entropy selection across puzzles
//!
//! Every guess in the search space is scored against every active puzzle; the
//! per-puzzle entropies are summed and the best sum wins.

use super::calculator::score_candidates;
use crate::core::Word;
use crate::solver::SolverError;
use crate::solver::candidates::CandidateSet;
use crate::solver::oracle::PatternOracle;
use crate::solver::puzzle::PuzzleState;
use rayon::prelude::*;
use std::cmp::Ordering;

/// A guess together with its aggregate score in bits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessScore {
    pub word: Word,
    pub score: f64,
}

/// Scored guess that still remembers its corpus position for tie-breaks
#[derive(Clone, Copy)]
struct Ranked {
    index: usize,
    score: f64,
}

/// Higher score first, then earlier corpus position
fn rank_order(a: &Ranked, b: &Ranked) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| b.index.cmp(&a.index))
}

/// Distinct candidate sets among the active puzzles, with how many puzzles share each
///
/// Puzzles start out with identical sets, so scoring each distinct set once
/// saves most of the work in the early rounds.
fn active_groups(puzzles: &[PuzzleState]) -> Vec<(&CandidateSet, usize)> {
    let mut groups: Vec<(&CandidateSet, usize)> = Vec::new();
    for puzzle in puzzles.iter().filter(|p| p.is_active()) {
        let set = puzzle.candidates();
        match groups.iter_mut().find(|(g, _)| *g == set) {
            Some((_, count)) => *count += 1,
            None => groups.push((set, 1)),
        }
    }
    groups
}

fn aggregate(
    oracle: &PatternOracle<'_>,
    guess_index: usize,
    groups: &[(&CandidateSet, usize)],
) -> f64 {
    groups
        .iter()
        .map(|&(set, count)| score_candidates(oracle, guess_index, set) * count as f64)
        .sum()
}

fn check_preconditions(
    pool_size: usize,
    groups: &[(&CandidateSet, usize)],
) -> Result<(), SolverError> {
    if pool_size == 0 {
        return Err(SolverError::EmptyCorpus);
    }
    if groups.is_empty() {
        return Err(SolverError::NoActivePuzzles);
    }
    Ok(())
}

/// Aggregate score of the guess at `guess_index`: the sum of its entropy over active puzzles
///
/// Solved puzzles contribute nothing.
#[must_use]
pub fn aggregate_score(
    oracle: &PatternOracle<'_>,
    guess_index: usize,
    puzzles: &[PuzzleState],
) -> f64 {
    aggregate(oracle, guess_index, &active_groups(puzzles))
}

/// Select the guess with the highest aggregate score
///
/// The search space is the first `pool_size` words of the corpus guess list.
/// Exact ties go to the guess that comes first in that list, so the result is
/// the same on every run regardless of thread scheduling.
///
/// # Errors
/// Returns `SolverError::EmptyCorpus` if `pool_size` is zero and
/// `SolverError::NoActivePuzzles` if every puzzle is solved.
///
/// # Panics
/// Panics if `pool_size` exceeds the number of guesses in the corpus.
pub fn select_best_guess(
    oracle: &PatternOracle<'_>,
    pool_size: usize,
    puzzles: &[PuzzleState],
) -> Result<GuessScore, SolverError> {
    select_best_guess_with_progress(oracle, pool_size, puzzles, &|| {})
}

/// [`select_best_guess`], calling `on_scored` once per scored guess
///
/// `on_scored` is called from worker threads.
///
/// # Errors
/// Same as [`select_best_guess`].
///
/// # Panics
/// Panics if `pool_size` exceeds the number of guesses in the corpus.
pub fn select_best_guess_with_progress(
    oracle: &PatternOracle<'_>,
    pool_size: usize,
    puzzles: &[PuzzleState],
    on_scored: &(dyn Fn() + Sync),
) -> Result<GuessScore, SolverError> {
    let groups = active_groups(puzzles);
    check_preconditions(pool_size, &groups)?;
    assert!(pool_size <= oracle.corpus().guesses().len());

    let best = (0..pool_size)
        .into_par_iter()
        .map(|index| {
            let score = aggregate(oracle, index, &groups);
            on_scored();
            Ranked { index, score }
        })
        .max_by(rank_order)
        .ok_or(SolverError::EmptyCorpus)?;

    Ok(GuessScore {
        word: oracle.corpus().guesses()[best.index],
        score: best.score,
    })
}

/// The `top_k` best guesses, best first, with the same ordering as [`select_best_guess`]
///
/// # Errors
/// Same as [`select_best_guess`].
pub fn rank_guesses(
    oracle: &PatternOracle<'_>,
    pool_size: usize,
    puzzles: &[PuzzleState],
    top_k: usize,
) -> Result<Vec<GuessScore>, SolverError> {
    rank_guesses_with_progress(oracle, pool_size, puzzles, top_k, &|| {})
}

/// [`rank_guesses`], calling `on_scored` once per scored guess
///
/// # Errors
/// Same as [`select_best_guess`].
pub fn rank_guesses_with_progress(
    oracle: &PatternOracle<'_>,
    pool_size: usize,
    puzzles: &[PuzzleState],
    top_k: usize,
    on_scored: &(dyn Fn() + Sync),
) -> Result<Vec<GuessScore>, SolverError> {
    let groups = active_groups(puzzles);
    check_preconditions(pool_size, &groups)?;

    let mut ranked: Vec<Ranked> = (0..pool_size.min(oracle.corpus().guesses().len()))
        .into_par_iter()
        .map(|index| {
            let score = aggregate(oracle, index, &groups);
            on_scored();
            Ranked { index, score }
        })
        .collect();

    ranked.sort_unstable_by(|a, b| rank_order(b, a));
    ranked.truncate(top_k);

    let guesses = oracle.corpus().guesses();
    Ok(ranked
        .into_iter()
        .map(|r| GuessScore {
            word: guesses[r.index],
            score: r.score,
        })
        .collect())
}
