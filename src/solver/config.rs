//! Engine configuration
//!
//! Tunable knobs of a session. None of them change what "best guess" means
//! except `guess_limit`, which trades optimality for speed when set.

/// Default number of simultaneous puzzles (sedecordle)
pub const DEFAULT_PUZZLES: usize = 16;

/// Default pattern table budget: 64 Mi one-byte cells
pub const DEFAULT_TABLE_CELLS: usize = 64 * 1024 * 1024;

/// Configuration for a [`Session`](super::Session)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of puzzles played with the shared guess stream
    pub puzzle_count: usize,
    /// Only search this many guesses (corpus order) while sets are large
    pub guess_limit: Option<usize>,
    /// `guess_limit` applies while the largest active candidate set exceeds this
    pub limit_above: usize,
    /// Budget for the precomputed pattern table, in cells
    pub table_cells: usize,
    /// Recommend a puzzle's last remaining candidate instead of the entropy pick
    pub finish_singletons: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            puzzle_count: DEFAULT_PUZZLES,
            guess_limit: None,
            limit_above: 0,
            table_cells: DEFAULT_TABLE_CELLS,
            finish_singletons: true,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub const fn with_puzzle_count(mut self, puzzle_count: usize) -> Self {
        self.puzzle_count = puzzle_count;
        self
    }

    /// Cap the guess search space to a corpus-order prefix
    ///
    /// The cap is a speed/optimality trade-off: guesses past the prefix are
    /// never considered while it applies.
    #[must_use]
    pub const fn with_guess_limit(mut self, guess_limit: Option<usize>) -> Self {
        self.guess_limit = guess_limit;
        self
    }

    #[must_use]
    pub const fn with_limit_above(mut self, limit_above: usize) -> Self {
        self.limit_above = limit_above;
        self
    }

    #[must_use]
    pub const fn with_table_cells(mut self, table_cells: usize) -> Self {
        self.table_cells = table_cells;
        self
    }

    #[must_use]
    pub const fn with_finish_singletons(mut self, finish_singletons: bool) -> Self {
        self.finish_singletons = finish_singletons;
        self
    }

    /// Size of the guess search space for a corpus of `total` guesses, given the
    /// largest active candidate set
    #[must_use]
    pub fn search_space(&self, total: usize, largest_set: usize) -> usize {
        match self.guess_limit {
            Some(limit) if limit < total && largest_set > self.limit_above => limit,
            _ => total,
        }
    }
}
