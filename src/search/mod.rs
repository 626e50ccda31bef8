//! Game-tree search for treasure-duel.
//!
//! ## Overview
//!
//! This module implements fixed-depth adversarial search over duel
//! positions. Key features:
//!
//! - **Alpha-beta pruning**: Same values as minimax, a fraction of the
//!   nodes; plain minimax stays available as a reference
//! - **Move ordering**: Captures first, then approach moves, so cutoffs
//!   come early
//! - **Transposition table**: Snapshot-keyed cache with a
//!   monotonic-freshness rule
//! - **Quiescence**: Capture-only extension at the depth frontier
//! - **Opening book**: Precomputed first moves for known placements
//! - **Adaptive depth**: Searches deepen as the board empties
//!
//! ## Usage
//!
//! ```rust
//! use treasure_duel::core::{Coord, GameState};
//! use treasure_duel::search::{SearchConfig, SearchEngine};
//!
//! let state = GameState::with_treasures(4, [(Coord::new(1, 2), 6)]);
//!
//! let mut engine = SearchEngine::new(SearchConfig::default());
//! if let Some(dest) = engine.best_move(&state) {
//!     println!("best move: {dest}");
//! }
//! println!("searched {} nodes", engine.stats().nodes);
//! ```

pub mod book;
pub mod config;
pub mod engine;
pub mod ordering;
pub mod stats;
pub mod table;

// Re-export main types
pub use book::{BookKey, OpeningBook};
pub use config::SearchConfig;
pub use engine::{SearchEngine, SearchResult};
pub use ordering::{move_priority, order_moves};
pub use stats::SearchStats;
pub use table::{TranspositionTable, TtEntry};
