//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Depth bump and ceiling once at most two treasures remain.
const ENDGAME_TREASURES: usize = 2;
const ENDGAME_DEPTH_CAP: u32 = 8;

/// Depth bump and ceiling once at most four treasures remain.
const MIDGAME_TREASURES: usize = 4;
const MIDGAME_DEPTH_CAP: u32 = 6;

/// Search configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Base search depth in plies (default: 4).
    /// The adaptive schedule may deepen this as the board empties.
    pub depth: u32,

    /// Use alpha-beta pruning (default: true).
    /// When false the engine runs plain minimax; same values, many more
    /// nodes, and neither table nor quiescence apply.
    pub use_pruning: bool,

    /// Consult and fill the transposition table (default: true).
    pub use_table: bool,

    /// Consult the opening book before searching (default: true).
    pub use_book: bool,

    /// Deepen the search as treasures run out (default: true).
    pub adaptive_depth: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            use_pruning: true,
            use_table: true,
            use_book: true,
            adaptive_depth: true,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom base depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with pruning toggled.
    pub fn with_pruning(mut self, use_pruning: bool) -> Self {
        self.use_pruning = use_pruning;
        self
    }

    /// Create a new config with the transposition table toggled.
    pub fn with_table(mut self, use_table: bool) -> Self {
        self.use_table = use_table;
        self
    }

    /// Create a new config with the opening book toggled.
    pub fn with_book(mut self, use_book: bool) -> Self {
        self.use_book = use_book;
        self
    }

    /// Create a new config with adaptive deepening toggled.
    pub fn with_adaptive_depth(mut self, adaptive: bool) -> Self {
        self.adaptive_depth = adaptive;
        self
    }

    /// The depth a search should actually run at.
    ///
    /// With few treasures left the branching narrows and the endgame
    /// rewards precision, so the schedule deepens the base depth: +2
    /// (ceiling 8) at two or fewer treasures, +1 (ceiling 6) at four or
    /// fewer. The ceilings clamp absolutely; a base depth above one pulls
    /// down to it in that band, which bounds the node count late in the
    /// game. Returns the base depth unchanged when `adaptive_depth` is
    /// off.
    #[must_use]
    pub fn effective_depth(&self, treasures_remaining: usize) -> u32 {
        if !self.adaptive_depth {
            return self.depth;
        }

        if treasures_remaining <= ENDGAME_TREASURES {
            (self.depth + 2).min(ENDGAME_DEPTH_CAP)
        } else if treasures_remaining <= MIDGAME_TREASURES {
            (self.depth + 1).min(MIDGAME_DEPTH_CAP)
        } else {
            self.depth
        }
    }
}
