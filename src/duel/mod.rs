//! Engine-vs-engine duel sessions.
//!
//! A [`DuelRunner`] plays complete games between two configured engines,
//! one per side, and logs each game as a [`MatchRecord`]. The session
//! layer owns the one rule that lives between moves rather than inside
//! the tree: a side with no legal step passes, and the game continues as
//! long as the other side can still move.
//!
//! ## Usage
//!
//! ```rust
//! use treasure_duel::duel::{DuelConfig, DuelRunner};
//! use treasure_duel::setup::GameSetup;
//!
//! let mut runner = DuelRunner::new(DuelConfig::default());
//! let opening = GameSetup::default().build(42);
//!
//! let record = runner.play(&opening, 42);
//! assert!(record.completed);
//! ```

pub mod record;

// Re-export main types
pub use record::{MatchRecord, MoveRecord};

use serde::{Deserialize, Serialize};

use crate::core::player::Player;
use crate::core::state::GameState;
use crate::rules::is_terminal;
use crate::search::{SearchConfig, SearchEngine};
use crate::setup::GameSetup;

/// Configuration for a duel session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DuelConfig {
    /// Search configuration for First's engine.
    pub first: SearchConfig,

    /// Search configuration for Second's engine.
    pub second: SearchConfig,

    /// Maximum moves per game before the session adjudicates on score.
    pub max_moves: usize,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            first: SearchConfig::default(),
            second: SearchConfig::default(),
            max_moves: 100,
        }
    }
}

impl DuelConfig {
    /// Create a new duel config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set First's search configuration.
    pub fn with_first(mut self, config: SearchConfig) -> Self {
        self.first = config;
        self
    }

    /// Set Second's search configuration.
    pub fn with_second(mut self, config: SearchConfig) -> Self {
        self.second = config;
        self
    }

    /// Set the move cap.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }
}

/// Session driver for engine-vs-engine games.
///
/// Holds one engine per side so each keeps its own transposition table
/// warm across the moves of a game. Tables are cleared at the start of
/// every game, so records do not depend on what the runner played
/// before.
pub struct DuelRunner {
    config: DuelConfig,
    first_engine: SearchEngine,
    second_engine: SearchEngine,
}

impl DuelRunner {
    /// Create a runner with one engine per side.
    #[must_use]
    pub fn new(config: DuelConfig) -> Self {
        let first_engine = SearchEngine::new(config.first.clone());
        let second_engine = SearchEngine::new(config.second.clone());
        Self {
            config,
            first_engine,
            second_engine,
        }
    }

    /// Play one game from `initial` and record it.
    ///
    /// Each ply asks the mover's engine for a move, applies it, and logs
    /// it. A stuck mover passes without consuming a ply. The game ends at
    /// a terminal position or at the move cap; the cap marks the record
    /// as not completed and the outcome adjudicates on score.
    pub fn play(&mut self, initial: &GameState, seed: u64) -> MatchRecord {
        self.first_engine.clear_cache();
        self.second_engine.clear_cache();

        let mut record = MatchRecord::new(seed, initial.grid_size());
        let mut state = initial.clone();

        while record.len() < self.config.max_moves && !is_terminal(&state) {
            let side = state.turn();
            let engine = match side {
                Player::First => &mut self.first_engine,
                Player::Second => &mut self.second_engine,
            };

            let Some(dest) = engine.best_move(&state) else {
                // Not terminal, so the other side can move; pass the turn.
                state = state.with_turn(side.opponent());
                continue;
            };

            let collected = state.treasure_at(dest);
            record.push(MoveRecord::new(record.len() as u32, side, dest, collected));
            state = state.apply(dest);
        }

        record.finish(&state, is_terminal(&state));
        record
    }

    /// Play a batch of games on boards generated by `setup`.
    ///
    /// Game `i` uses seed `seed_offset + i` for both the board and the
    /// record, so any single game can be regenerated from its record's
    /// seed alone.
    pub fn play_games(
        &mut self,
        setup: &GameSetup,
        count: usize,
        seed_offset: u64,
    ) -> Vec<MatchRecord> {
        (0..count)
            .map(|i| {
                let seed = seed_offset.wrapping_add(i as u64);
                let initial = setup.build(seed);
                self.play(&initial, seed)
            })
            .collect()
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &DuelConfig {
        &self.config
    }

    /// Get one side's engine, e.g. to read its latest search stats.
    #[must_use]
    pub fn engine(&self, side: Player) -> &SearchEngine {
        match side {
            Player::First => &self.first_engine,
            Player::Second => &self.second_engine,
        }
    }
}
