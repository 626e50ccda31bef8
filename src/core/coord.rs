//! Grid coordinates and the four movement directions.
//!
//! ## Coord
//!
//! A cell on the square board. `x` is the row (0 at the top), `y` is the
//! column (0 at the left). Coordinates are small copy types and order
//! lexicographically by `(x, y)`, which gives every collection of cells a
//! canonical traversal order.
//!
//! ## Dir
//!
//! The four orthogonal steps. `Dir::ALL` fixes the enumeration order
//! (up, down, left, right); move generation and therefore tie-breaking
//! depend on it.

use serde::{Deserialize, Serialize};

/// A cell on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index (0 at the top edge).
    pub x: u8,
    /// Column index (0 at the left edge).
    pub y: u8,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another cell.
    ///
    /// ```
    /// use treasure_duel::core::Coord;
    ///
    /// assert_eq!(Coord::new(0, 0).manhattan(Coord::new(3, 3)), 6);
    /// assert_eq!(Coord::new(2, 1).manhattan(Coord::new(2, 1)), 0);
    /// ```
    #[must_use]
    pub fn manhattan(self, other: Coord) -> u32 {
        u32::from(self.x.abs_diff(other.x)) + u32::from(self.y.abs_diff(other.y))
    }

    /// Step one cell in `dir`.
    ///
    /// Returns `None` when the step would leave the coordinate space
    /// (underflow past row/column 0 or overflow past `u8::MAX`). Board
    /// bounds are checked separately by the rules layer.
    #[must_use]
    pub fn step(self, dir: Dir) -> Option<Coord> {
        let stepped = match dir {
            Dir::Up => Coord::new(self.x.checked_sub(1)?, self.y),
            Dir::Down => Coord::new(self.x.checked_add(1)?, self.y),
            Dir::Left => Coord::new(self.x, self.y.checked_sub(1)?),
            Dir::Right => Coord::new(self.x, self.y.checked_add(1)?),
        };
        Some(stepped)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four orthogonal movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dir {
    /// Row decreases.
    Up,
    /// Row increases.
    Down,
    /// Column decreases.
    Left,
    /// Column increases.
    Right,
}

impl Dir {
    /// All directions in the canonical enumeration order.
    ///
    /// Move lists are generated in this order, so any tie-break that keeps
    /// "earliest seen" preserves up-before-down-before-left-before-right.
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];
}
