//! Core duel types: coordinates, players, state snapshots, RNG.
//!
//! This module contains the fundamental building blocks shared by the
//! rules, evaluation, and search layers. Everything here is a plain value
//! type: cheap to clone, structurally comparable, serializable.

pub mod coord;
pub mod player;
pub mod rng;
pub mod state;

pub use coord::{Coord, Dir};
pub use player::Player;
pub use rng::DuelRng;
pub use state::GameState;
