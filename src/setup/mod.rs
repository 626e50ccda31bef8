//! Board generation: seeded random treasure placement.
//!
//! A [`GameSetup`] describes the board family (size, treasure count, value
//! range); [`GameSetup::build`] turns a seed into one concrete opening
//! position. The same setup and seed always produce the same board, so a
//! game is reproducible from two numbers.

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;
use crate::core::rng::DuelRng;
use crate::core::state::GameState;

/// Builder for the opening position.
///
/// Defaults match the standard duel: a 4x4 board with five treasures
/// valued between -3 and 10 (negative values are traps worth avoiding).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSetup {
    grid_size: u8,
    treasure_count: usize,
    value_range: std::ops::RangeInclusive<i32>,
}

impl Default for GameSetup {
    fn default() -> Self {
        Self {
            grid_size: 4,
            treasure_count: 5,
            value_range: -3..=10,
        }
    }
}

impl GameSetup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid_size(mut self, size: u8) -> Self {
        assert!(size >= 2, "Grid must be at least 2x2");
        self.grid_size = size;
        self
    }

    pub fn treasure_count(mut self, count: usize) -> Self {
        self.treasure_count = count;
        self
    }

    pub fn value_range(mut self, range: std::ops::RangeInclusive<i32>) -> Self {
        assert!(range.start() <= range.end(), "Empty value range");
        self.value_range = range;
        self
    }

    /// Build the opening position for `seed`.
    ///
    /// Treasures land on distinct cells drawn uniformly from everything
    /// except the two starting corners. A treasure count larger than the
    /// number of available cells saturates instead of panicking, so tiny
    /// boards stay usable.
    #[must_use]
    pub fn build(&self, seed: u64) -> GameState {
        let mut rng = DuelRng::new(seed);
        let size = self.grid_size;

        let corners = [Coord::new(0, 0), Coord::new(size - 1, size - 1)];
        let mut cells: Vec<Coord> = (0..size)
            .flat_map(|x| (0..size).map(move |y| Coord::new(x, y)))
            .filter(|cell| !corners.contains(cell))
            .collect();

        rng.shuffle(&mut cells);

        let count = self.treasure_count.min(cells.len());
        let treasures: Vec<(Coord, i32)> = cells[..count]
            .iter()
            .map(|&cell| (cell, rng.gen_range_inclusive(self.value_range.clone())))
            .collect();

        GameState::with_treasures(size, treasures)
    }
}
