//! Adversarial game-tree search.
//!
//! Two searchers over the same move space:
//!
//! - [`SearchEngine::minimax`]: plain fixed-depth minimax. The reference
//!   implementation; visits every node, no caching, no extensions.
//! - [`SearchEngine::alpha_beta`]: the production search. Alpha-beta
//!   pruning over ordered moves, a transposition table with a
//!   monotonic-freshness rule, and a capture-only quiescence extension at
//!   the depth frontier.
//!
//! [`SearchEngine::best_move`] is the top-level entry: it short-circuits
//! forced moves, consults the opening book, picks an effective depth from
//! the adaptive schedule, runs the configured search, and falls back to
//! the first legal move if the search somehow yields none.
//!
//! Values are always from Second's point of view; the engine maximizes
//! when Second is to move and minimizes otherwise, so it can sit on
//! either side of the board.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;
use crate::core::player::Player;
use crate::core::state::GameState;
use crate::eval::evaluate::evaluate;
use crate::rules::engine::{is_terminal, legal_moves, MoveList};

use super::book::OpeningBook;
use super::config::SearchConfig;
use super::ordering::order_moves;
use super::stats::SearchStats;
use super::table::TranspositionTable;

/// Value and principal move from one search.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Position value from Second's point of view.
    pub value: f64,
    /// The move realizing that value; `None` at leaves and forced ends.
    pub best: Option<Coord>,
}

/// Game-tree search context.
///
/// Owns the configuration, the transposition table, the opening book, and
/// the statistics of the latest search. One engine serves one side for a
/// whole game; call [`SearchEngine::clear_cache`] between games.
pub struct SearchEngine {
    /// Search configuration.
    config: SearchConfig,

    /// Cached evaluations across searches of one game.
    table: TranspositionTable,

    /// Precomputed opening responses.
    book: OpeningBook,

    /// Statistics of the most recent search.
    stats: SearchStats,
}

impl SearchEngine {
    /// Create a new engine with the stock opening book.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            table: TranspositionTable::new(),
            book: OpeningBook::standard(),
            stats: SearchStats::default(),
        }
    }

    /// Replace the opening book.
    #[must_use]
    pub fn with_book(mut self, book: OpeningBook) -> Self {
        self.book = book;
        self
    }

    /// Pick a move for the side to move.
    ///
    /// Flow: a forced (single) move returns immediately with zero nodes
    /// searched; a book answer that is legal on this board returns next;
    /// otherwise the configured search runs at the adaptive depth. As long
    /// as any legal move exists, the result is `Some`: if the search
    /// surfaces no move, the first legal one stands in.
    ///
    /// Returns `None` only when the side to move has no legal move at all.
    pub fn best_move(&mut self, state: &GameState) -> Option<Coord> {
        let start = Instant::now();
        self.stats.reset();

        let moves = legal_moves(state);
        if moves.is_empty() {
            return None;
        }
        if moves.len() == 1 {
            return Some(moves[0]);
        }

        if self.config.use_book {
            if let Some(dest) = self.book.lookup(state) {
                if moves.contains(&dest) {
                    self.stats.book_hits += 1;
                    return Some(dest);
                }
            }
        }

        let depth = self.config.effective_depth(state.treasure_count());
        let maximizing = state.turn() == Player::Second;

        let (_, best) = if self.config.use_pruning {
            self.alpha_beta_at(state, depth, f64::NEG_INFINITY, f64::INFINITY, maximizing, 0)
        } else {
            self.minimax_at(state, depth, maximizing)
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;

        best.or_else(|| moves.first().copied())
    }

    /// Run plain minimax to `depth`.
    ///
    /// Visits the full tree; useful as a correctness reference and for
    /// measuring what pruning saves. Ignores the table, the book, and
    /// quiescence.
    pub fn minimax(&mut self, state: &GameState, depth: u32) -> SearchResult {
        let start = Instant::now();
        self.stats.reset();

        let maximizing = state.turn() == Player::Second;
        let (value, best) = self.minimax_at(state, depth, maximizing);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        SearchResult { value, best }
    }

    /// Run the alpha-beta search to `depth`.
    pub fn alpha_beta(&mut self, state: &GameState, depth: u32) -> SearchResult {
        let start = Instant::now();
        self.stats.reset();

        let maximizing = state.turn() == Player::Second;
        let (value, best) =
            self.alpha_beta_at(state, depth, f64::NEG_INFINITY, f64::INFINITY, maximizing, 0);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        SearchResult { value, best }
    }

    /// Drop every cached evaluation. Call between games.
    pub fn clear_cache(&mut self) {
        self.table.clear();
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get statistics for the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the transposition table.
    #[must_use]
    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }

    /// Get the opening book.
    #[must_use]
    pub fn book(&self) -> &OpeningBook {
        &self.book
    }

    fn minimax_at(
        &mut self,
        state: &GameState,
        depth: u32,
        maximizing: bool,
    ) -> (f64, Option<Coord>) {
        self.stats.nodes += 1;

        if depth == 0 || is_terminal(state) {
            return (evaluate(state), None);
        }

        let moves = legal_moves(state);
        if moves.is_empty() {
            return (evaluate(state), None);
        }

        let mut best_dest = None;

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for &dest in &moves {
                let (value, _) = self.minimax_at(&state.apply(dest), depth - 1, false);
                if value > best {
                    best = value;
                    best_dest = Some(dest);
                }
            }
            (best, best_dest)
        } else {
            let mut best = f64::INFINITY;
            for &dest in &moves {
                let (value, _) = self.minimax_at(&state.apply(dest), depth - 1, true);
                if value < best {
                    best = value;
                    best_dest = Some(dest);
                }
            }
            (best, best_dest)
        }
    }

    fn alpha_beta_at(
        &mut self,
        state: &GameState,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
        ply: u32,
    ) -> (f64, Option<Coord>) {
        self.stats.nodes += 1;

        // A table hit carries no move, so the root never takes one; it
        // always derives a real move from its children.
        if self.config.use_table && ply > 0 {
            if let Some(value) = self.table.lookup(state, depth) {
                self.stats.table_hits += 1;
                return (value, None);
            }
        }

        if depth == 0 || is_terminal(state) {
            let value = if depth == 0 && !is_terminal(state) {
                self.quiescence(state, alpha, beta, maximizing)
            } else {
                evaluate(state)
            };
            self.store(state, value, depth);
            return (value, None);
        }

        let mut moves = legal_moves(state);
        if moves.is_empty() {
            let value = evaluate(state);
            self.store(state, value, depth);
            return (value, None);
        }

        order_moves(state, &mut moves);

        // Default to the first ordered move so a result always names one.
        let mut best_dest = Some(moves[0]);

        let value = if maximizing {
            let mut best = f64::NEG_INFINITY;
            for &dest in &moves {
                let (child, _) =
                    self.alpha_beta_at(&state.apply(dest), depth - 1, alpha, beta, false, ply + 1);
                if child > best {
                    best = child;
                    best_dest = Some(dest);
                }
                alpha = alpha.max(child);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for &dest in &moves {
                let (child, _) =
                    self.alpha_beta_at(&state.apply(dest), depth - 1, alpha, beta, true, ply + 1);
                if child < best {
                    best = child;
                    best_dest = Some(dest);
                }
                beta = beta.min(child);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        };

        self.store(state, value, depth);
        (value, best_dest)
    }

    /// Capture-only extension at the depth frontier.
    ///
    /// Searches nothing but treasure-grabbing moves so the frontier
    /// evaluation never cuts a capture exchange in half. The static
    /// evaluation stands pat: a side is never forced below what refusing
    /// every capture is worth.
    fn quiescence(
        &mut self,
        state: &GameState,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        self.stats.quiescence_nodes += 1;

        let captures: MoveList = legal_moves(state)
            .into_iter()
            .filter(|&dest| state.treasure_at(dest).is_some())
            .collect();

        if captures.is_empty() {
            return evaluate(state);
        }

        if maximizing {
            let mut best = evaluate(state);
            for &dest in &captures {
                let value = self.quiescence(&state.apply(dest), alpha, beta, false);
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = evaluate(state);
            for &dest in &captures {
                let value = self.quiescence(&state.apply(dest), alpha, beta, true);
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    fn store(&mut self, state: &GameState, value: f64, depth: u32) {
        if self.config.use_table {
            self.table.store(state, value, depth);
            self.stats.table_stores += 1;
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
