//! Simulation command
//!
//! Plays a whole session against hidden answers drawn from the corpus,
//! computing the feedback for every puzzle itself.

use crate::core::{Pattern, Word};
use crate::solver::{SolverError, Session};
use crate::wordlists::Corpus;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Rounds of a real sedecordle game
pub const DEFAULT_MAX_ROUNDS: usize = 21;

/// One played round
pub struct RoundRecord {
    pub number: usize,
    pub guess: Word,
    pub score: f64,
    /// Feedback per puzzle active in this round, by puzzle id
    pub feedback: Vec<(usize, Pattern)>,
    pub active_after: usize,
}

/// Result of a simulated session
pub struct SimulationResult {
    pub targets: Vec<Word>,
    pub rounds: Vec<RoundRecord>,
    /// Round in which each puzzle was solved, by puzzle index
    pub solved_in: Vec<Option<usize>>,
    pub complete: bool,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.solved_in.iter().flatten().count()
    }
}

/// Draw `count` hidden answers, distinct while the answer list allows it
///
/// The same seed always yields the same targets.
#[must_use]
pub fn pick_targets(corpus: &Corpus, count: usize, seed: Option<u64>) -> Vec<Word> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let answers = corpus.answers();

    let mut targets: Vec<Word> = answers.choose_multiple(&mut rng, count).copied().collect();
    while targets.len() < count {
        match answers.choose(&mut rng) {
            Some(word) => targets.push(*word),
            None => break,
        }
    }
    targets
}

/// Play `session` against `targets` until every puzzle is solved or
/// `max_rounds` rounds have been played
///
/// `targets[i]` is the hidden answer of puzzle `i + 1`.
///
/// # Errors
///
/// Returns an error if the session cannot recommend a guess or rejects
/// feedback, which only happens when a target is not in the answer list.
///
/// # Panics
///
/// Panics if `targets` does not have one word per puzzle.
pub fn run_simulation(
    session: &mut Session<'_>,
    targets: &[Word],
    max_rounds: usize,
) -> Result<SimulationResult, SolverError> {
    assert_eq!(targets.len(), session.puzzles().len());

    let start = Instant::now();
    let mut rounds = Vec::new();
    let mut solved_in = vec![None; targets.len()];

    while !session.is_session_complete() && rounds.len() < max_rounds {
        let best = session.recommend()?;
        let number = session.start_round(best.word)?;

        let active: Vec<usize> = session.active_puzzles().map(|p| p.id()).collect();
        let mut feedback = Vec::with_capacity(active.len());
        for id in active {
            let pattern = Pattern::calculate(&best.word, &targets[id - 1]);
            session.apply_feedback(id, pattern.into())?;
            if pattern.is_perfect() {
                solved_in[id - 1] = Some(number);
            }
            feedback.push((id, pattern));
        }

        rounds.push(RoundRecord {
            number,
            guess: best.word,
            score: best.score,
            feedback,
            active_after: session.active_count(),
        });
    }

    Ok(SimulationResult {
        targets: targets.to_vec(),
        rounds,
        solved_in,
        complete: session.is_session_complete(),
        duration: start.elapsed(),
    })
}
