//! Multi-puzzle session
//!
//! Owns the puzzle boards and runs the round protocol: recommend a guess, open
//! a round with the guess actually played, then collect one response per
//! puzzle that was active when the round opened.

use super::SolverError;
use super::config::EngineConfig;
use super::entropy::{
    GuessScore, rank_guesses_with_progress, score, select_best_guess_with_progress,
};
use super::oracle::PatternOracle;
use super::puzzle::{PuzzleState, Response};
use crate::core::Word;
use crate::wordlists::Corpus;
use std::time::Instant;

/// True iff every puzzle is solved
#[must_use]
pub fn is_session_complete(puzzles: &[PuzzleState]) -> bool {
    puzzles.iter().all(|p| !p.is_active())
}

/// A guess that has been played and is waiting for feedback
#[derive(Debug, Clone)]
pub struct Round {
    number: usize,
    guess: Word,
    pending: Vec<usize>,
    answered: Vec<usize>,
    started: Instant,
}

impl Round {
    /// 1-based round number
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    #[must_use]
    pub const fn guess(&self) -> Word {
        self.guess
    }

    /// Puzzle ids still waiting for a response, in id order
    #[must_use]
    pub fn pending(&self) -> &[usize] {
        &self.pending
    }
}

/// A sedecordle game in progress
pub struct Session<'a> {
    corpus: &'a Corpus,
    oracle: PatternOracle<'a>,
    config: EngineConfig,
    puzzles: Vec<PuzzleState>,
    round: Option<Round>,
    rounds_completed: usize,
}

impl<'a> Session<'a> {
    /// Start a session: `config.puzzle_count` active puzzles, each allowing every answer
    ///
    /// # Examples
    /// ```
    /// use sedecordle_solver::solver::{EngineConfig, Session};
    /// use sedecordle_solver::wordlists::{Corpus, loader::words_from_slice};
    ///
    /// let corpus = Corpus::answers_only(words_from_slice(&["crane", "slate", "irate"])).unwrap();
    /// let session = Session::new(&corpus, EngineConfig::default());
    ///
    /// assert_eq!(session.puzzles().len(), 16);
    /// assert!(session.puzzles().iter().all(|p| p.remaining_count() == 3));
    /// assert!(!session.is_session_complete());
    /// ```
    #[must_use]
    pub fn new(corpus: &'a Corpus, config: EngineConfig) -> Self {
        let puzzles = (1..=config.puzzle_count)
            .map(|id| PuzzleState::new(id, corpus))
            .collect();
        let oracle = PatternOracle::new(corpus, config.table_cells);

        log::info!(
            "new session: {} puzzles, {} answers, {} guesses",
            config.puzzle_count,
            corpus.answers().len(),
            corpus.guesses().len()
        );

        Self {
            corpus,
            oracle,
            config,
            puzzles,
            round: None,
            rounds_completed: 0,
        }
    }

    #[must_use]
    pub const fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn puzzles(&self) -> &[PuzzleState] {
        &self.puzzles
    }

    /// Look up a puzzle by its 1-based id
    ///
    /// # Errors
    /// Returns `SolverError::UnknownPuzzle` for ids outside `1..=puzzle_count`.
    pub fn puzzle(&self, id: usize) -> Result<&PuzzleState, SolverError> {
        self.index_of(id).map(|i| &self.puzzles[i])
    }

    fn index_of(&self, id: usize) -> Result<usize, SolverError> {
        id.checked_sub(1)
            .filter(|&i| i < self.puzzles.len())
            .ok_or(SolverError::UnknownPuzzle(id))
    }

    /// Number of answers still possible for puzzle `id`
    ///
    /// # Errors
    /// Returns `SolverError::UnknownPuzzle` for unknown ids.
    pub fn remaining_count(&self, id: usize) -> Result<usize, SolverError> {
        self.puzzle(id).map(PuzzleState::remaining_count)
    }

    pub fn active_puzzles(&self) -> impl Iterator<Item = &PuzzleState> {
        self.puzzles.iter().filter(|p| p.is_active())
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active_puzzles().count()
    }

    #[must_use]
    pub fn is_session_complete(&self) -> bool {
        is_session_complete(&self.puzzles)
    }

    /// Rounds whose feedback has been fully applied
    #[must_use]
    pub const fn rounds_completed(&self) -> usize {
        self.rounds_completed
    }

    /// The round waiting for feedback, if any
    #[must_use]
    pub const fn current_round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Number of guesses (corpus order) the next recommendation searches
    #[must_use]
    pub fn search_space(&self) -> usize {
        let largest = self
            .active_puzzles()
            .map(PuzzleState::remaining_count)
            .max()
            .unwrap_or(0);
        self.config
            .search_space(self.corpus.guesses().len(), largest)
    }

    /// Sum of `word`'s entropy over the active puzzles
    #[must_use]
    pub fn aggregate_score(&self, word: &Word) -> f64 {
        self.active_puzzles()
            .map(|puzzle| {
                let candidates: Vec<&Word> = puzzle.candidates().words(self.corpus).collect();
                score(word, &candidates)
            })
            .sum()
    }

    fn ready_to_score(&self) -> Result<usize, SolverError> {
        if let Some(round) = &self.round {
            return Err(SolverError::RoundInProgress(round.number));
        }
        if self.active_count() == 0 {
            return Err(SolverError::NoActivePuzzles);
        }

        let pool = self.search_space();
        let total = self.corpus.guesses().len();
        if pool < total {
            log::info!("guess limit: searching the first {pool} of {total} guesses");
        }
        Ok(pool)
    }

    /// The next guess to play
    ///
    /// # Errors
    /// Returns `SolverError::RoundInProgress` while a round still waits for
    /// feedback, `SolverError::NoActivePuzzles` once everything is solved and
    /// `SolverError::EmptyCorpus` if the guess limit leaves nothing to search.
    pub fn recommend(&self) -> Result<GuessScore, SolverError> {
        self.recommend_with_progress(&|| {})
    }

    /// [`Session::recommend`], reporting each scored guess to `on_scored`
    ///
    /// # Errors
    /// Same as [`Session::recommend`].
    pub fn recommend_with_progress(
        &self,
        on_scored: &(dyn Fn() + Sync),
    ) -> Result<GuessScore, SolverError> {
        let pool = self.ready_to_score()?;

        if let Some(finish) = self.finishing_guess() {
            return Ok(finish);
        }

        let start = Instant::now();
        let best = select_best_guess_with_progress(&self.oracle, pool, &self.puzzles, on_scored)?;
        log::debug!(
            "scored {pool} guesses in {:.2}s, best {} ({:.3} bits)",
            start.elapsed().as_secs_f64(),
            best.word,
            best.score
        );
        Ok(best)
    }

    /// The lone candidate of the lowest-numbered active puzzle that has one left
    ///
    /// Always `None` when `finish_singletons` is off.
    #[must_use]
    pub fn finishing_guess(&self) -> Option<GuessScore> {
        if !self.config.finish_singletons {
            return None;
        }
        let word = self
            .active_puzzles()
            .find_map(|p| p.candidates().single(self.corpus))?;
        log::debug!("finishing a puzzle with its last candidate {word}");
        Some(GuessScore {
            word: *word,
            score: self.aggregate_score(word),
        })
    }

    /// The `top_k` entropy picks for the next round, best first
    ///
    /// Unlike [`Session::recommend`] this ignores the singleton policy.
    ///
    /// # Errors
    /// Same as [`Session::recommend`].
    pub fn top_guesses(&self, top_k: usize) -> Result<Vec<GuessScore>, SolverError> {
        self.top_guesses_with_progress(top_k, &|| {})
    }

    /// [`Session::top_guesses`], reporting each scored guess to `on_scored`
    ///
    /// # Errors
    /// Same as [`Session::recommend`].
    pub fn top_guesses_with_progress(
        &self,
        top_k: usize,
        on_scored: &(dyn Fn() + Sync),
    ) -> Result<Vec<GuessScore>, SolverError> {
        let pool = self.ready_to_score()?;
        rank_guesses_with_progress(&self.oracle, pool, &self.puzzles, top_k, on_scored)
    }

    /// Open a round for the guess that was actually played
    ///
    /// Every puzzle active right now must then receive a response before the
    /// next round can start. Returns the round number.
    ///
    /// # Errors
    /// Returns `SolverError::RoundInProgress` if the previous round is still
    /// open and `SolverError::NoActivePuzzles` if there is nothing to play.
    pub fn start_round(&mut self, guess: Word) -> Result<usize, SolverError> {
        if let Some(round) = &self.round {
            return Err(SolverError::RoundInProgress(round.number));
        }

        let pending: Vec<usize> = self.active_puzzles().map(PuzzleState::id).collect();
        if pending.is_empty() {
            return Err(SolverError::NoActivePuzzles);
        }

        let number = self.rounds_completed + 1;
        log::info!(
            "round {number}: {guess} on {} active puzzles",
            pending.len()
        );

        self.round = Some(Round {
            number,
            guess,
            answered: Vec::with_capacity(pending.len()),
            pending,
            started: Instant::now(),
        });
        Ok(number)
    }

    /// Apply the response of one puzzle to the open round
    ///
    /// On error nothing changes; the caller can resupply the response. The
    /// round closes once its last pending puzzle has answered.
    ///
    /// # Errors
    /// - `SolverError::NoRoundInProgress` before [`Session::start_round`]
    /// - `SolverError::UnknownPuzzle` for ids outside `1..=puzzle_count`
    /// - `SolverError::DuplicateFeedback` if this puzzle already answered this round
    /// - `SolverError::PuzzleAlreadySolved` if the puzzle was solved before the round
    /// - `SolverError::InconsistentFeedback` if no answer fits the feedback
    pub fn apply_feedback(
        &mut self,
        puzzle_id: usize,
        response: Response,
    ) -> Result<&PuzzleState, SolverError> {
        let index = self.index_of(puzzle_id)?;
        let round = self.round.as_mut().ok_or(SolverError::NoRoundInProgress)?;

        let Some(slot) = round.pending.iter().position(|&id| id == puzzle_id) else {
            return Err(if round.answered.contains(&puzzle_id) {
                SolverError::DuplicateFeedback(puzzle_id)
            } else {
                SolverError::PuzzleAlreadySolved(puzzle_id)
            });
        };

        self.puzzles[index].apply(self.corpus, round.guess, response)?;
        round.pending.remove(slot);
        round.answered.push(puzzle_id);

        if round.pending.is_empty() {
            log::debug!(
                "round {} complete in {:.2}s, {} puzzles still active",
                round.number,
                round.started.elapsed().as_secs_f64(),
                self.puzzles.iter().filter(|p| p.is_active()).count()
            );
            self.round = None;
            self.rounds_completed += 1;
        }

        Ok(&self.puzzles[index])
    }

    /// Play `guess` and apply a response for each listed puzzle
    ///
    /// Stops at the first error, leaving the round open with the responses
    /// applied so far.
    ///
    /// # Errors
    /// Any error of [`Session::start_round`] or [`Session::apply_feedback`].
    pub fn play_round<I>(&mut self, guess: Word, responses: I) -> Result<(), SolverError>
    where
        I: IntoIterator<Item = (usize, Response)>,
    {
        self.start_round(guess)?;
        for (puzzle_id, response) in responses {
            self.apply_feedback(puzzle_id, response)?;
        }
        Ok(())
    }
}
