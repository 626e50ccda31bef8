//! Move ordering for alpha-beta.
//!
//! Good ordering is what makes pruning bite: examining the likely-best
//! move first tightens the window early and the rest of the siblings cut
//! cheaply. Here "likely best" is simple greed, in two tiers: grabbing a
//! treasure beats any amount of approach, and among quiet moves the one
//! ending nearer a treasure comes first.

use smallvec::SmallVec;

use crate::core::coord::Coord;
use crate::core::state::GameState;
use crate::rules::engine::nearest_treasure;

/// Priority of stepping to `dest`: captured value times 1000, minus the
/// Manhattan distance from `dest` to the nearest remaining treasure.
///
/// The scale separates the tiers: distances never exceed a few dozen, so
/// even a 1-point capture outranks every quiet move, and a negative-value
/// trap ranks below all of them.
#[must_use]
pub fn move_priority(state: &GameState, dest: Coord) -> i64 {
    let mut priority = 0i64;

    if let Some(value) = state.treasure_at(dest) {
        priority += i64::from(value) * 1000;
    }
    if let Some((_, distance)) = nearest_treasure(state, dest) {
        priority -= i64::from(distance);
    }

    priority
}

/// Sort `moves` by descending priority.
///
/// The sort is stable, so equal-priority destinations keep the canonical
/// up/down/left/right generation order; with no treasures on the board the
/// list comes back unchanged.
pub fn order_moves(state: &GameState, moves: &mut SmallVec<[Coord; 4]>) {
    moves.sort_by_key(|&dest| std::cmp::Reverse(move_priority(state, dest)));
}
