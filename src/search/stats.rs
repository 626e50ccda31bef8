//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited by the main search (interior and leaf).
    pub nodes: u64,

    /// Nodes visited by the quiescence extension.
    pub quiescence_nodes: u64,

    /// Transposition-table hits that short-circuited a subtree.
    pub table_hits: u64,

    /// Entries written to the transposition table.
    pub table_stores: u64,

    /// Beta cutoffs taken in the main search.
    pub cutoffs: u64,

    /// Moves answered straight from the opening book.
    pub book_hits: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate main-search nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of main-search nodes answered by the table.
    #[must_use]
    pub fn table_hit_rate(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.table_hits as f64 / self.nodes as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.table_hits, 0);
        assert_eq!(stats.book_hits, 0);
    }

    #[test]
    fn test_nodes_per_second() {
        let mut stats = SearchStats::new();
        stats.nodes = 5000;
        stats.time_us = 1_000_000; // 1 second

        assert_eq!(stats.nodes_per_second(), 5000.0);
    }

    #[test]
    fn test_nodes_per_second_no_time() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes_per_second(), 0.0);
    }

    #[test]
    fn test_table_hit_rate() {
        let mut stats = SearchStats::new();
        stats.nodes = 200;
        stats.table_hits = 50;

        assert_eq!(stats.table_hit_rate(), 0.25);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.nodes = 100;
        stats.cutoffs = 30;

        stats.reset();

        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.cutoffs, 0);
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.nodes = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats.nodes, deserialized.nodes);
    }
}
