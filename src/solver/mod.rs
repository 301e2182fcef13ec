//! Sedecordle solving engine
//!
//! Per-puzzle state and filtering, the pattern oracle and the aggregate
//! entropy selector, tied together by [`Session`].

pub mod candidates;
pub mod config;
pub mod constraints;
pub mod entropy;
mod error;
pub mod oracle;
pub mod puzzle;
mod session;

pub use candidates::CandidateSet;
pub use config::EngineConfig;
pub use constraints::{Constraints, Observation, is_consistent};
pub use error::SolverError;
pub use oracle::{PatternOracle, compute_pattern};
pub use puzzle::{PuzzleState, Response, Status};
pub use session::{Round, Session, is_session_complete};
