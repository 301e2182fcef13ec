//! Command implementations

pub mod analyze;
pub mod play;
pub mod simulate;

pub use analyze::{AnalysisResult, PuzzleAnalysis, analyze_word};
pub use play::{PLAY_ROUNDS, PlayOutcome, run_play};
pub use simulate::{
    DEFAULT_MAX_ROUNDS, RoundRecord, SimulationResult, pick_targets, run_simulation,
};
