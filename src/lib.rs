//! # treasure-duel
//!
//! A two-player treasure-duel grid engine with alpha-beta game-tree search.
//!
//! Two players start in opposite corners of a small grid and alternate
//! single orthogonal steps onto cells nobody has entered before, picking
//! up signed treasure values as they land. The engine searches the game
//! tree to play either side.
//!
//! ## Design Principles
//!
//! 1. **Immutable positions**: Applying a move returns a new snapshot and
//!    never touches the old one. Search keeps thousands of positions alive
//!    at once without copying boards.
//!
//! 2. **Determinism**: Same seed, same game. Board generation, search
//!    tie-breaks, and every map iteration that could leak ordering are
//!    pinned down, so records regenerate bit-for-bit from a seed.
//!
//! 3. **Rules as pure functions**: Legality, terminal detection, and the
//!    winner rule are free functions over snapshots. The search calls them
//!    millions of times per move and relies on them never mutating.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs` for search
//!   snapshots.
//!
//! - **Snapshot-keyed caching**: The transposition table keys on the full
//!   position with an order-independent hash, and keeps an entry only
//!   while it is at least as deep as the probe asking for it.
//!
//! - **Fixed evaluation perspective**: Values are always from Second's
//!   point of view; the engine maximizes or minimizes by whose turn it
//!   is, so one evaluation serves both sides.
//!
//! ## Modules
//!
//! - `core`: Coordinates, players, position snapshots, seeded RNG
//! - `rules`: Legal moves, terminal detection, winner
//! - `eval`: Graded positional evaluation
//! - `search`: Minimax and alpha-beta engine with table, book, quiescence
//! - `setup`: Seeded board generation
//! - `duel`: Engine-vs-engine sessions and match records

pub mod core;
pub mod rules;
pub mod eval;
pub mod search;
pub mod setup;
pub mod duel;

// Re-export commonly used types
pub use crate::core::{Coord, Dir, DuelRng, GameState, Player};

pub use crate::rules::{
    is_terminal, legal_moves, nearest_treasure, winner, MoveList, Winner,
};

pub use crate::eval::{evaluate, score_only, WIN_SCORE};

pub use crate::search::{
    OpeningBook, SearchConfig, SearchEngine, SearchResult, SearchStats,
    TranspositionTable, TtEntry,
};

pub use crate::setup::GameSetup;

pub use crate::duel::{DuelConfig, DuelRunner, MatchRecord, MoveRecord};
