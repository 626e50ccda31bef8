//! Position evaluation from the maximizer's point of view.
//!
//! The evaluator blends four fuzzy factors on top of the raw score
//! difference (Second minus First):
//!
//! 1. Score margin, weight 0.5
//! 2. Second's closeness to the nearest treasure, weight 0.25
//! 3. First's closeness to the nearest treasure, weight 0.15 (subtracted)
//! 4. Mobility difference, weight 0.1
//!
//! The blend lives in roughly `[-0.3, 0.85]` and is scaled by 20 before
//! being added to the material term, so banked points dominate and the
//! fuzzy factors act as a positional tiebreak worth a few points at most.
//!
//! Once the last treasure is gone no positional factor matters; the
//! evaluation collapses to plus or minus [`WIN_SCORE`] (or 0.0 when
//! level), far outside the reachable heuristic range.

use crate::core::player::Player;
use crate::core::state::GameState;
use crate::rules::engine::{legal_moves, nearest_treasure};

use super::fuzzy;

/// Terminal evaluation magnitude. Dominates any blend of material and
/// positional factors a live board can produce.
pub const WIN_SCORE: f64 = 1000.0;

/// Weight of the banked score margin.
const SCORE_MARGIN_WEIGHT: f64 = 0.5;
/// Weight of Second's treasure proximity.
const OWN_PROXIMITY_WEIGHT: f64 = 0.25;
/// Weight of First's treasure proximity (a threat, so subtracted).
const OPPONENT_PROXIMITY_WEIGHT: f64 = 0.15;
/// Weight of the mobility difference.
const MOBILITY_WEIGHT: f64 = 0.1;

/// Margin at which the score factor saturates.
const MAX_SCORE_MARGIN: i32 = 20;
/// A player has at most four moves.
const MOBILITY_CEILING: usize = 4;
/// Scale applied to the fuzzy blend before adding it to the material term.
const FUZZY_SCALE: f64 = 20.0;

/// Evaluate a position for the maximizer (Second).
///
/// Higher is better for Second. The result is a finite f64 for every
/// well-formed state; terminal bounds are `-WIN_SCORE ..= WIN_SCORE`.
#[must_use]
pub fn evaluate(state: &GameState) -> f64 {
    let margin = state.score_difference();

    // All treasures collected: the duel is decided on banked points alone.
    if state.treasure_count() == 0 {
        return match margin.cmp(&0) {
            std::cmp::Ordering::Greater => WIN_SCORE,
            std::cmp::Ordering::Less => -WIN_SCORE,
            std::cmp::Ordering::Equal => 0.0,
        };
    }

    let max_distance = 2 * u32::from(state.grid_size());
    let own_distance = nearest_treasure(state, state.second_pos()).map(|(_, d)| d);
    let opponent_distance = nearest_treasure(state, state.first_pos()).map(|(_, d)| d);
    let own_mobility = legal_moves(&state.with_turn(Player::Second)).len();
    let opponent_mobility = legal_moves(&state.with_turn(Player::First)).len();

    let mut blended = fuzzy::score_margin(margin, MAX_SCORE_MARGIN) * SCORE_MARGIN_WEIGHT;
    blended += fuzzy::distance_score(own_distance, max_distance) * OWN_PROXIMITY_WEIGHT;
    blended -= fuzzy::distance_score(opponent_distance, max_distance) * OPPONENT_PROXIMITY_WEIGHT;
    blended += (fuzzy::mobility_score(own_mobility, MOBILITY_CEILING)
        - fuzzy::mobility_score(opponent_mobility, MOBILITY_CEILING))
        * MOBILITY_WEIGHT;

    f64::from(margin) + blended * FUZZY_SCALE
}

/// Bare material evaluation: the score difference and nothing else.
///
/// Useful as a baseline when measuring what the fuzzy factors buy.
#[must_use]
pub fn score_only(state: &GameState) -> f64 {
    f64::from(state.score_difference())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::coord::Coord;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_terminal_positive() {
        // Second banks the only treasure; empty board, Second leads.
        let state = GameState::with_treasures(4, [(Coord::new(3, 2), 8)])
            .with_turn(Player::Second)
            .apply(Coord::new(3, 2));

        assert_eq!(state.treasure_count(), 0);
        assert!(approx(evaluate(&state), WIN_SCORE));
    }

    #[test]
    fn test_terminal_negative() {
        let state = GameState::with_treasures(4, [(Coord::new(0, 1), 8)]).apply(Coord::new(0, 1));

        assert!(approx(evaluate(&state), -WIN_SCORE));
    }

    #[test]
    fn test_terminal_level_is_zero() {
        let state = GameState::new(4);

        assert_eq!(state.treasure_count(), 0);
        assert!(approx(evaluate(&state), 0.0));
    }

    #[test]
    fn test_fresh_board_exact_value() {
        // 4x4, one treasure on (1,1):
        //   margin 0           -> 0.5  * 0.5   = 0.25
        //   Second 4 cells off -> 0.5  * 0.25  = 0.125
        //   First 2 cells off  -> 0.75 * 0.15  = 0.1125 (subtracted)
        //   both have 2 moves  -> 0.0  * 0.1   = 0
        // evaluate = 0 + 20 * 0.2625 = 5.25
        let state = GameState::with_treasures(4, [(Coord::new(1, 1), 5)]);

        assert!(approx(evaluate(&state), 5.25));
    }

    #[test]
    fn test_closer_maximizer_scores_higher() {
        // Same board but the treasure sits nearer Second than First.
        let near_first = GameState::with_treasures(4, [(Coord::new(1, 1), 5)]);
        let near_second = GameState::with_treasures(4, [(Coord::new(2, 2), 5)]);

        assert!(evaluate(&near_second) > evaluate(&near_first));
    }

    #[test]
    fn test_banked_points_dominate_position() {
        // Second up 6 with poor position still beats level scores with
        // good position: the material term is worth 20x the blend shift.
        let level = GameState::with_treasures(6, [(Coord::new(4, 4), 5)]);
        let ahead = GameState::with_treasures(6, [(Coord::new(1, 1), 5), (Coord::new(5, 4), 6)])
            .with_turn(Player::Second)
            .apply(Coord::new(5, 4));

        assert!(evaluate(&ahead) > evaluate(&level));
    }

    #[test]
    fn test_score_only_is_the_margin() {
        let state = GameState::with_treasures(4, [(Coord::new(0, 1), 2), (Coord::new(3, 2), 9)])
            .apply(Coord::new(0, 1))
            .apply(Coord::new(3, 2));

        assert!(approx(score_only(&state), 7.0));
    }
}
