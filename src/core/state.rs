//! The duel position: one immutable seven-field snapshot.
//!
//! ## GameState
//!
//! Everything the rules, evaluation, and search need to know about a
//! position:
//! - Board size
//! - Both player positions and scores
//! - Remaining treasures (cell to signed value)
//! - Visited cells (never legal to re-enter)
//! - Whose turn it is
//!
//! Uses `im` persistent data structures for O(1) cloning: `apply` returns a
//! fresh snapshot that shares structure with its parent, so a deep search
//! tree costs a few pointer copies per node instead of a map copy.
//!
//! ## Identity
//!
//! Equality is structural over all seven fields. `Hash` is written by hand
//! so the treasure map and the visited set are hashed in sorted coordinate
//! order; two snapshots reached by different move orders hash identically,
//! which is what lets the transposition table merge transpositions.

use im::{HashMap as ImHashMap, HashSet as ImHashSet};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::hash::{Hash, Hasher};

use super::coord::Coord;
use super::player::Player;

// Serialized snapshots keep treasures and visited cells as coordinate-sorted
// vectors: JSON has no struct-keyed maps, and the sort makes the encoding
// canonical for any given position.
fn serialize_treasures<S: Serializer>(
    map: &ImHashMap<Coord, i32>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut entries: Vec<(Coord, i32)> = map.iter().map(|(&cell, &value)| (cell, value)).collect();
    entries.sort_by_key(|&(cell, _)| cell);
    entries.serialize(serializer)
}

fn deserialize_treasures<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<ImHashMap<Coord, i32>, D::Error> {
    let entries = Vec::<(Coord, i32)>::deserialize(deserializer)?;
    Ok(entries.into_iter().collect())
}

fn serialize_visited<S: Serializer>(
    set: &ImHashSet<Coord>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut cells: Vec<Coord> = set.iter().copied().collect();
    cells.sort();
    cells.serialize(serializer)
}

fn deserialize_visited<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<ImHashSet<Coord>, D::Error> {
    let cells = Vec::<Coord>::deserialize(deserializer)?;
    Ok(cells.into_iter().collect())
}

/// One immutable position in a treasure duel.
///
/// Snapshots never mutate: `apply` and `with_turn` return new values and
/// leave the receiver untouched. Construction establishes the invariants
/// (players on visited cells, treasures disjoint from visited, everything
/// in bounds) and no later operation can break them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    grid_size: u8,
    first_pos: Coord,
    second_pos: Coord,
    first_score: i32,
    second_score: i32,
    #[serde(
        serialize_with = "serialize_treasures",
        deserialize_with = "deserialize_treasures"
    )]
    treasures: ImHashMap<Coord, i32>,
    #[serde(serialize_with = "serialize_visited", deserialize_with = "deserialize_visited")]
    visited: ImHashSet<Coord>,
    turn: Player,
}

impl GameState {
    /// Create the standard opening position on an empty board.
    ///
    /// `First` sits at the top-left corner, `Second` at the bottom-right,
    /// both corners are marked visited, scores are zero, and `First` is to
    /// move. No treasures are placed; see [`GameState::with_treasures`].
    #[must_use]
    pub fn new(grid_size: u8) -> Self {
        assert!(grid_size >= 2, "Grid must be at least 2x2");

        let first_pos = Coord::new(0, 0);
        let second_pos = Coord::new(grid_size - 1, grid_size - 1);

        let mut visited = ImHashSet::new();
        visited.insert(first_pos);
        visited.insert(second_pos);

        Self {
            grid_size,
            first_pos,
            second_pos,
            first_score: 0,
            second_score: 0,
            treasures: ImHashMap::new(),
            visited,
            turn: Player::First,
        }
    }

    /// Create the opening position with treasures already on the board.
    ///
    /// Each `(cell, value)` pair must be in bounds and off the two starting
    /// corners. Values may be negative (traps).
    #[must_use]
    pub fn with_treasures(grid_size: u8, treasures: impl IntoIterator<Item = (Coord, i32)>) -> Self {
        let mut state = Self::new(grid_size);
        for (cell, value) in treasures {
            assert!(state.in_bounds(cell), "Treasure out of bounds");
            assert!(
                !state.visited.contains(&cell),
                "Treasure on a starting corner"
            );
            state.treasures.insert(cell, value);
        }
        state
    }

    // === Accessors ===

    /// Board side length.
    #[must_use]
    pub fn grid_size(&self) -> u8 {
        self.grid_size
    }

    /// Where `side` currently stands.
    #[must_use]
    pub fn position(&self, side: Player) -> Coord {
        match side {
            Player::First => self.first_pos,
            Player::Second => self.second_pos,
        }
    }

    /// Where the player to move currently stands.
    #[must_use]
    pub fn current_position(&self) -> Coord {
        self.position(self.turn)
    }

    /// First player's position.
    #[must_use]
    pub fn first_pos(&self) -> Coord {
        self.first_pos
    }

    /// Second player's position.
    #[must_use]
    pub fn second_pos(&self) -> Coord {
        self.second_pos
    }

    /// `side`'s accumulated score.
    #[must_use]
    pub fn score(&self, side: Player) -> i32 {
        match side {
            Player::First => self.first_score,
            Player::Second => self.second_score,
        }
    }

    /// First player's accumulated score.
    #[must_use]
    pub fn first_score(&self) -> i32 {
        self.first_score
    }

    /// Second player's accumulated score.
    #[must_use]
    pub fn second_score(&self) -> i32 {
        self.second_score
    }

    /// Second's score minus First's score.
    ///
    /// Positive when the maximizer leads. This is the raw material term of
    /// the evaluation function.
    #[must_use]
    pub fn score_difference(&self) -> i32 {
        self.second_score - self.first_score
    }

    /// Remaining treasures.
    #[must_use]
    pub fn treasures(&self) -> &ImHashMap<Coord, i32> {
        &self.treasures
    }

    /// Value of the treasure at `cell`, if one remains there.
    #[must_use]
    pub fn treasure_at(&self, cell: Coord) -> Option<i32> {
        self.treasures.get(&cell).copied()
    }

    /// How many treasures remain.
    #[must_use]
    pub fn treasure_count(&self) -> usize {
        self.treasures.len()
    }

    /// Cells no player may enter again.
    #[must_use]
    pub fn visited(&self) -> &ImHashSet<Coord> {
        &self.visited
    }

    /// Has `cell` been visited?
    #[must_use]
    pub fn is_visited(&self, cell: Coord) -> bool {
        self.visited.contains(&cell)
    }

    /// The side to move.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Is `cell` on the board?
    #[must_use]
    pub fn in_bounds(&self, cell: Coord) -> bool {
        cell.x < self.grid_size && cell.y < self.grid_size
    }

    // === Transitions ===

    /// Apply a move for the side to move, returning the successor position.
    ///
    /// The mover steps to `dest`, `dest` becomes visited, any treasure
    /// there is credited to the mover and removed, and the turn flips.
    /// The receiver is left untouched.
    ///
    /// `dest` is trusted: callers pick it from
    /// [`legal_moves`](crate::rules::legal_moves). Applying an illegal
    /// destination silently produces a position outside the reachable
    /// space.
    #[must_use]
    pub fn apply(&self, dest: Coord) -> GameState {
        let mut next = self.clone();

        let credit = next.treasures.remove(&dest).unwrap_or(0);
        next.visited.insert(dest);

        match next.turn {
            Player::First => {
                next.first_pos = dest;
                next.first_score += credit;
            }
            Player::Second => {
                next.second_pos = dest;
                next.second_score += credit;
            }
        }

        next.turn = next.turn.opponent();
        next
    }

    /// A copy of this position with the side to move forced to `side`.
    ///
    /// Used for opponent mobility queries and for the session-level pass
    /// when the mover is stuck; nothing else changes.
    #[must_use]
    pub fn with_turn(&self, side: Player) -> GameState {
        let mut next = self.clone();
        next.turn = side;
        next
    }
}

// The derived Hash for im collections would depend on internal ordering.
// Hash sorted snapshots of the map and set instead so equal states always
// produce equal hashes regardless of insertion history.
impl Hash for GameState {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.grid_size.hash(hasher);
        self.first_pos.hash(hasher);
        self.second_pos.hash(hasher);
        self.first_score.hash(hasher);
        self.second_score.hash(hasher);
        self.turn.hash(hasher);

        let mut treasures: Vec<(&Coord, &i32)> = self.treasures.iter().collect();
        treasures.sort_by_key(|(cell, _)| **cell);
        treasures.len().hash(hasher);
        for (cell, value) in treasures {
            cell.hash(hasher);
            value.hash(hasher);
        }

        let mut visited: Vec<&Coord> = self.visited.iter().collect();
        visited.sort();
        visited.len().hash(hasher);
        for cell in visited {
            cell.hash(hasher);
        }
    }
}

impl std::fmt::Display for GameState {
    /// Render the board for logs and debugging.
    ///
    /// `F`/`S` mark the players, `#` a visited cell, `.` an open cell, and
    /// signed values mark treasures.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "first {:+} / second {:+} / {} to move",
            self.first_score, self.second_score, self.turn
        )?;
        for x in 0..self.grid_size {
            if x > 0 {
                writeln!(f)?;
            }
            let mut cells = Vec::with_capacity(self.grid_size as usize);
            for y in 0..self.grid_size {
                let cell = Coord::new(x, y);
                let rendered = if cell == self.first_pos {
                    " F ".to_string()
                } else if cell == self.second_pos {
                    " S ".to_string()
                } else if let Some(value) = self.treasures.get(&cell) {
                    format!("{:>3}", format!("{value:+}"))
                } else if self.visited.contains(&cell) {
                    " # ".to_string()
                } else {
                    " . ".to_string()
                };
                cells.push(rendered);
            }
            write!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}
