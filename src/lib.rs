//! Sedecordle Solver
//!
//! Plays sixteen Wordle puzzles at once with one shared stream of guesses,
//! picking each guess to maximize the information summed over every
//! unsolved puzzle.
//!
//! # Quick Start
//!
//! ```rust
//! use sedecordle_solver::core::{Pattern, Word};
//! use sedecordle_solver::solver::{EngineConfig, Session};
//! use sedecordle_solver::wordlists::{Corpus, loader::words_from_slice};
//!
//! let corpus = Corpus::answers_only(words_from_slice(&["crane", "slate", "irate", "grate"]))
//!     .unwrap();
//! let mut session = Session::new(&corpus, EngineConfig::default().with_puzzle_count(2));
//!
//! let guess = session.recommend().unwrap().word;
//! session.start_round(guess).unwrap();
//! for (id, answer) in [(1, "slate"), (2, "grate")] {
//!     let pattern = Pattern::calculate(&guess, &Word::new(answer).unwrap());
//!     session.apply_feedback(id, pattern.into()).unwrap();
//! }
//! assert_eq!(session.rounds_completed(), 1);
//! ```

// Core domain types
pub mod core;

// Solving engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
