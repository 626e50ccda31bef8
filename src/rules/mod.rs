//! Game rules: legal movement, terminal detection, winner.
//!
//! Pure functions over [`GameState`](crate::core::GameState); the search
//! and the session driver both call into this module and never interpret
//! board geometry themselves.

pub mod engine;

pub use engine::{is_terminal, legal_moves, nearest_treasure, winner, MoveList, Winner};
