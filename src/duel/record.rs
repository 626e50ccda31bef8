//! Match records: a replayable log of one finished duel.
//!
//! A record captures everything needed to reconstruct or audit a game:
//! the seed and board size that generated it, every move in order, the
//! final scores, and how it ended. Records serialize with serde and have
//! a compact bincode codec for storing batches of games.

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;
use crate::core::player::Player;
use crate::core::state::GameState;
use crate::rules::{winner, Winner};

/// One move in a finished duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Move number in the game (0-indexed).
    pub ply: u32,

    /// The side that moved.
    pub side: Player,

    /// Where the mover stepped.
    pub dest: Coord,

    /// Treasure value picked up on `dest`, if any.
    pub collected: Option<i32>,
}

impl MoveRecord {
    pub fn new(ply: u32, side: Player, dest: Coord, collected: Option<i32>) -> Self {
        Self {
            ply,
            side,
            dest,
            collected,
        }
    }
}

/// A complete game from a duel session.
///
/// Scores and outcome are written once, when the session finishes the
/// game; until then they hold the opening values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Seed that generated the opening position.
    pub seed: u64,

    /// Board size the game was played on.
    pub grid_size: u8,

    /// Every move, in play order.
    pub moves: Vec<MoveRecord>,

    /// First's final score.
    pub first_score: i32,

    /// Second's final score.
    pub second_score: i32,

    /// Who led when the game ended.
    pub outcome: Winner,

    /// True when the game reached a real end, false when the session's
    /// move cap adjudicated it.
    pub completed: bool,
}

impl MatchRecord {
    /// Create an empty record for a game about to be played.
    pub fn new(seed: u64, grid_size: u8) -> Self {
        Self {
            seed,
            grid_size,
            moves: Vec::new(),
            first_score: 0,
            second_score: 0,
            outcome: Winner::Draw,
            completed: false,
        }
    }

    /// Append a move to the record.
    pub fn push(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    /// Write the final position into the record.
    pub fn finish(&mut self, terminal: &GameState, completed: bool) {
        self.first_score = terminal.score(Player::First);
        self.second_score = terminal.score(Player::Second);
        self.outcome = winner(terminal);
        self.completed = completed;
    }

    /// Number of moves played.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if any moves were played.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves made by one side.
    pub fn player_moves(&self, side: Player) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter().filter(move |m| m.side == side)
    }

    /// Total treasure value one side collected.
    ///
    /// Sums the per-move pickups, so on a finished record it equals that
    /// side's final score.
    pub fn collected_total(&self, side: Player) -> i32 {
        self.player_moves(side)
            .filter_map(|m| m.collected)
            .sum()
    }

    /// Encode the record into the compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a record from the compact binary form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
