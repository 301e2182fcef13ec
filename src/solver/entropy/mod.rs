//! Entropy-based guess selection
//!
//! Implements Shannon entropy over feedback partitions and sums it across
//! the active puzzles. This is the foundation of the whole engine.

mod calculator;
mod selector;

pub use calculator::{
    GuessMetrics, calculate_metrics, partition, score, score_candidates, shannon_entropy,
};
pub use selector::{
    GuessScore, aggregate_score, rank_guesses, rank_guesses_with_progress, select_best_guess,
    select_best_guess_with_progress,
};
