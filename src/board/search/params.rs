#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Search depth used when none is given, in plies
pub const DEFAULT_MAX_DEPTH: i32 = 3;

/// Settings for a single root search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Plies to search. Zero or less only evaluates the current position.
    pub max_depth: i32,
    /// Seed for move-order shuffling; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            seed: None,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub const fn with_depth(mut self, max_depth: i32) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
