//! Position evaluation: fuzzy membership factors and the blended heuristic.

pub mod evaluate;
pub mod fuzzy;

pub use evaluate::{evaluate, score_only, WIN_SCORE};
