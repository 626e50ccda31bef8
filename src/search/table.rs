//! Transposition table: cached evaluations of searched positions.
//!
//! The table is keyed by the full [`GameState`] snapshot, not a digest of
//! it. Structural equality backs every probe, so two positions can never
//! collide; the canonical-order `Hash` on `GameState` makes bucket lookup
//! cheap, and the im-backed fields make storing a key a matter of a few
//! pointer copies.
//!
//! Entries obey a monotonic-freshness rule: a cached value answers a probe
//! only if it was computed with at least as much remaining depth as the
//! probe asks for. Shallower entries stay in place until the next store
//! overwrites them.

use rustc_hash::FxHashMap;

use crate::core::state::GameState;

/// One cached evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TtEntry {
    /// Search value of the position.
    pub value: f64,
    /// Remaining depth the value was computed with.
    pub depth: u32,
}

/// Cache of positions already evaluated by the alpha-beta search.
#[derive(Clone, Debug, Default)]
pub struct TranspositionTable {
    entries: FxHashMap<GameState, TtEntry>,
}

impl TranspositionTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A cached value usable for a probe at `depth`.
    ///
    /// Returns `None` when the position is unknown or only known at a
    /// shallower depth.
    #[must_use]
    pub fn lookup(&self, state: &GameState, depth: u32) -> Option<f64> {
        self.entries
            .get(state)
            .and_then(|entry| (entry.depth >= depth).then_some(entry.value))
    }

    /// The raw entry for a position, ignoring the freshness rule.
    #[must_use]
    pub fn entry(&self, state: &GameState) -> Option<TtEntry> {
        self.entries.get(state).copied()
    }

    /// Record `value` for `state`, overwriting any previous entry.
    ///
    /// The overwrite is unconditional: the latest search result wins even
    /// when the previous entry was deeper. The search stores at every node
    /// it completes, so an entry always reflects the most recent pass over
    /// the position.
    pub fn store(&mut self, state: &GameState, value: f64, depth: u32) {
        self.entries.insert(state.clone(), TtEntry { value, depth });
    }

    /// Drop every entry.
    ///
    /// Position identity includes the treasure layout, so stale entries
    /// can't answer probes from a different game; clearing between games
    /// is how the table's memory stays bounded.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the table empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
