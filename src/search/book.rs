//! Opening book: precomputed first moves.
//!
//! The book is a finite lookup table keyed by where both players stand and
//! whose turn it is. It only answers while at most the two starting
//! corners have been visited; once anyone has moved, positions leave book
//! territory and the search takes over.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;
use crate::core::player::Player;
use crate::core::state::GameState;

/// Book lookups stop once more cells than the two corners are visited.
const MAX_BOOK_VISITED: usize = 2;

/// Identifies an opening position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookKey {
    /// First player's position.
    pub first: Coord,
    /// Second player's position.
    pub second: Coord,
    /// Side to move.
    pub turn: Player,
}

impl BookKey {
    /// The key describing `state`'s player placement and turn.
    #[must_use]
    pub fn of(state: &GameState) -> Self {
        Self {
            first: state.first_pos(),
            second: state.second_pos(),
            turn: state.turn(),
        }
    }
}

/// Precomputed responses for known opening positions.
#[derive(Clone, Debug, Default)]
pub struct OpeningBook {
    entries: FxHashMap<BookKey, Coord>,
}

impl OpeningBook {
    /// Create an empty book.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The stock book for the 4x4 board.
    ///
    /// Both entries develop toward the centre from the standard corners:
    /// First opens down to (1,0), Second opens up to (2,3).
    #[must_use]
    pub fn standard() -> Self {
        let mut book = Self::empty();
        book.insert(
            BookKey {
                first: Coord::new(0, 0),
                second: Coord::new(3, 3),
                turn: Player::First,
            },
            Coord::new(1, 0),
        );
        book.insert(
            BookKey {
                first: Coord::new(0, 0),
                second: Coord::new(3, 3),
                turn: Player::Second,
            },
            Coord::new(2, 3),
        );
        book
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, key: BookKey, dest: Coord) {
        self.entries.insert(key, dest);
    }

    /// The book's answer for `state`, if it has one.
    ///
    /// Returns `None` outside book territory (more than the starting
    /// corners visited) or for unknown placements. The caller still
    /// confirms the destination is legal on the concrete board; the book
    /// knows placements, not treasure layouts.
    #[must_use]
    pub fn lookup(&self, state: &GameState) -> Option<Coord> {
        if state.visited().len() > MAX_BOOK_VISITED {
            return None;
        }
        self.entries.get(&BookKey::of(state)).copied()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the book empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_book_first_opening() {
        let book = OpeningBook::standard();
        let state = GameState::new(4);

        assert_eq!(book.lookup(&state), Some(Coord::new(1, 0)));
    }

    #[test]
    fn test_standard_book_second_opening() {
        let book = OpeningBook::standard();
        let state = GameState::new(4).with_turn(Player::Second);

        assert_eq!(book.lookup(&state), Some(Coord::new(2, 3)));
    }

    #[test]
    fn test_book_silent_after_first_move() {
        let book = OpeningBook::standard();
        let state = GameState::new(4).apply(Coord::new(1, 0));

        // Second to move with three cells visited: out of book territory.
        assert_eq!(state.visited().len(), 3);
        assert_eq!(book.lookup(&state), None);
    }

    #[test]
    fn test_book_silent_for_unknown_placement() {
        let book = OpeningBook::standard();
        let state = GameState::new(5);

        assert_eq!(book.lookup(&state), None);
    }

    #[test]
    fn test_empty_book() {
        let book = OpeningBook::empty();

        assert!(book.is_empty());
        assert_eq!(book.lookup(&GameState::new(4)), None);
    }

    #[test]
    fn test_custom_entry() {
        let mut book = OpeningBook::empty();
        let state = GameState::new(5);

        book.insert(BookKey::of(&state), Coord::new(0, 1));

        assert_eq!(book.len(), 1);
        assert_eq!(book.lookup(&state), Some(Coord::new(0, 1)));
    }
}
