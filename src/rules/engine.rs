//! Movement legality, terminal detection, and the winner rule.
//!
//! The rules are small and fixed, so they live as free functions over
//! [`GameState`] rather than behind a trait:
//! - Which steps are legal for the side to move
//! - When the duel is over
//! - Who leads a position
//!
//! All of them are pure; the search calls them millions of times per move
//! and relies on them never mutating a snapshot.

use smallvec::SmallVec;

use crate::core::coord::{Coord, Dir};
use crate::core::player::Player;
use crate::core::state::GameState;

/// Up to four destinations, inline on the stack.
pub type MoveList = SmallVec<[Coord; 4]>;

/// Outcome of a finished (or adjudicated) duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Winner {
    /// First leads.
    First,
    /// Second leads.
    Second,
    /// Scores are level.
    Draw,
}

impl Winner {
    /// Check if `side` is the winning side.
    #[must_use]
    pub fn is_side(&self, side: Player) -> bool {
        matches!(
            (self, side),
            (Winner::First, Player::First) | (Winner::Second, Player::Second)
        )
    }
}

/// Legal destinations for the side to move.
///
/// One orthogonal step that stays on the board and lands on a cell nobody
/// has visited. Destinations come out in the fixed direction order (up,
/// down, left, right), which downstream tie-breaks depend on.
///
/// ```
/// use treasure_duel::core::{Coord, GameState};
/// use treasure_duel::rules::legal_moves;
///
/// // 3x3 opening: First at (0,0) can only step down or right.
/// let state = GameState::new(3);
/// let moves = legal_moves(&state);
/// assert_eq!(moves.as_slice(), &[Coord::new(1, 0), Coord::new(0, 1)]);
/// ```
#[must_use]
pub fn legal_moves(state: &GameState) -> MoveList {
    let from = state.current_position();
    let mut moves = MoveList::new();

    for dir in Dir::ALL {
        if let Some(dest) = from.step(dir) {
            if state.in_bounds(dest) && !state.is_visited(dest) {
                moves.push(dest);
            }
        }
    }

    moves
}

/// Is the duel over?
///
/// Two ways to end: every treasure has been collected, or neither side has
/// a legal move. A position where only the side to move is stuck is not
/// terminal; the session layer passes the turn instead.
#[must_use]
pub fn is_terminal(state: &GameState) -> bool {
    if state.treasure_count() == 0 {
        return true;
    }

    legal_moves(state).is_empty()
        && legal_moves(&state.with_turn(state.turn().opponent())).is_empty()
}

/// Which side leads the position.
///
/// Pure score comparison; callers decide whether the position is actually
/// final (via [`is_terminal`]) or an adjudication of a capped game.
#[must_use]
pub fn winner(state: &GameState) -> Winner {
    match state.first_score().cmp(&state.second_score()) {
        std::cmp::Ordering::Greater => Winner::First,
        std::cmp::Ordering::Less => Winner::Second,
        std::cmp::Ordering::Equal => Winner::Draw,
    }
}

/// The treasure nearest to `from`, with its Manhattan distance.
///
/// Linear scan over the remaining treasures; `None` when the board is
/// bare. Ties prefer the smallest coordinate so the result is independent
/// of map iteration order.
#[must_use]
pub fn nearest_treasure(state: &GameState, from: Coord) -> Option<(Coord, u32)> {
    state
        .treasures()
        .iter()
        .map(|(&cell, _)| (cell, from.manhattan(cell)))
        .min_by_key(|&(cell, distance)| (distance, cell))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_moves_from_open_center() {
        // Put Second's corner far away and walk First to the center.
        let state = GameState::new(5)
            .apply(Coord::new(1, 0))
            .with_turn(Player::First)
            .apply(Coord::new(2, 0))
            .with_turn(Player::First)
            .apply(Coord::new(2, 1))
            .with_turn(Player::First)
            .apply(Coord::new(2, 2))
            .with_turn(Player::First);

        let moves = legal_moves(&state);

        // (2,1) is already visited; up, down, right remain.
        assert_eq!(
            moves.as_slice(),
            &[Coord::new(1, 2), Coord::new(3, 2), Coord::new(2, 3)]
        );
    }

    #[test]
    fn test_legal_moves_opening_corner_order() {
        let state = GameState::new(3);
        let moves = legal_moves(&state);

        assert_eq!(moves.as_slice(), &[Coord::new(1, 0), Coord::new(0, 1)]);
    }

    #[test]
    fn test_legal_moves_exclude_visited() {
        let state = GameState::new(3).apply(Coord::new(1, 0));

        // Second at (2,2): up is (1,2), left is (2,1), both open.
        assert_eq!(
            legal_moves(&state).as_slice(),
            &[Coord::new(1, 2), Coord::new(2, 1)]
        );

        // Walk Second up; First at (1,0) can't re-enter (0,0).
        let state = state.apply(Coord::new(1, 2));
        assert_eq!(
            legal_moves(&state).as_slice(),
            &[Coord::new(2, 0), Coord::new(1, 1)]
        );
    }

    #[test]
    fn test_terminal_when_treasures_gone() {
        let state = GameState::new(4);
        assert!(is_terminal(&state));

        let with_loot = GameState::with_treasures(4, [(Coord::new(1, 1), 3)]);
        assert!(!is_terminal(&with_loot));
    }

    #[test]
    fn test_terminal_when_both_sides_stuck() {
        // Every cell of a 3x3 board except the centre treasure gets
        // visited, with First parked at (0,2) and Second at (2,0). Neither
        // neighbourhood has an open cell left. `apply` trusts its caller,
        // so the walk below is allowed to include non-adjacent hops.
        let state = GameState::with_treasures(3, [(Coord::new(1, 1), 5)])
            .apply(Coord::new(1, 0))
            .apply(Coord::new(0, 1))
            .apply(Coord::new(1, 2))
            .apply(Coord::new(2, 1))
            .apply(Coord::new(0, 2))
            .apply(Coord::new(2, 0));

        assert_eq!(state.treasure_count(), 1);
        assert!(legal_moves(&state).is_empty());
        assert!(legal_moves(&state.with_turn(Player::Second)).is_empty());
        assert!(is_terminal(&state));
    }

    #[test]
    fn test_mover_stuck_alone_is_not_terminal() {
        // First walks into (0,2) with both exits already burned; Second
        // still has open cells, so the duel goes on.
        let state = GameState::with_treasures(3, [(Coord::new(1, 1), 5)])
            .apply(Coord::new(0, 1))
            .apply(Coord::new(1, 2))
            .apply(Coord::new(0, 2))
            .apply(Coord::new(2, 1));

        assert_eq!(state.turn(), Player::First);
        assert!(legal_moves(&state).is_empty());
        assert!(!is_terminal(&state));
        assert!(!legal_moves(&state.with_turn(Player::Second)).is_empty());
    }

    #[test]
    fn test_winner_tracks_the_lead() {
        let state = GameState::with_treasures(4, [(Coord::new(0, 1), 6), (Coord::new(3, 2), 2)]);
        assert_eq!(winner(&state), Winner::Draw);

        let first_leads = state.apply(Coord::new(0, 1));
        assert_eq!(winner(&first_leads), Winner::First);
        assert!(winner(&first_leads).is_side(Player::First));

        let narrowed = first_leads.apply(Coord::new(3, 2));
        assert_eq!(winner(&narrowed), Winner::First);

        let second_only = GameState::with_treasures(4, [(Coord::new(3, 2), 2)])
            .with_turn(Player::Second)
            .apply(Coord::new(3, 2));
        assert_eq!(winner(&second_only), Winner::Second);
    }

    #[test]
    fn test_nearest_treasure() {
        let state = GameState::with_treasures(4, [(Coord::new(0, 3), 5), (Coord::new(2, 2), 1)]);

        assert_eq!(
            nearest_treasure(&state, Coord::new(0, 0)),
            Some((Coord::new(0, 3), 3))
        );
        assert_eq!(
            nearest_treasure(&state, Coord::new(3, 3)),
            Some((Coord::new(2, 2), 2))
        );
    }

    #[test]
    fn test_nearest_treasure_tie_prefers_smallest_coord() {
        // Both treasures sit two steps from the origin.
        let state = GameState::with_treasures(4, [(Coord::new(2, 0), 1), (Coord::new(0, 2), 9)]);

        assert_eq!(
            nearest_treasure(&state, Coord::new(0, 0)),
            Some((Coord::new(0, 2), 2))
        );
    }

    #[test]
    fn test_nearest_treasure_empty_board() {
        let state = GameState::new(4);
        assert_eq!(nearest_treasure(&state, Coord::new(1, 1)), None);
    }
}
