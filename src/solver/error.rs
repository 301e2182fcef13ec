//! Engine error taxonomy

use crate::core::{InputShapeError, Pattern, Word};
use thiserror::Error;

/// Errors surfaced by the guess-selection engine
///
/// None of these are recovered from internally: a failed operation leaves
/// every puzzle exactly as it was and the caller decides what to resupply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error(transparent)]
    InputShape(#[from] InputShapeError),

    #[error("feedback {pattern} for {guess} leaves puzzle {puzzle} with no possible answer")]
    InconsistentFeedback {
        puzzle: usize,
        guess: Word,
        pattern: Pattern,
    },

    #[error("the guess list is empty")]
    EmptyCorpus,

    #[error("the answer list is empty")]
    EmptyAnswers,

    #[error("no active puzzles remain")]
    NoActivePuzzles,

    #[error("there is no puzzle {0}")]
    UnknownPuzzle(usize),

    #[error("puzzle {0} is already solved")]
    PuzzleAlreadySolved(usize),

    #[error("puzzle {0} already has feedback for this round")]
    DuplicateFeedback(usize),

    #[error("round {0} is still waiting for feedback")]
    RoundInProgress(usize),

    #[error("no guess has been played this round")]
    NoRoundInProgress,
}
