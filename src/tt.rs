/*
 * Talon, a bitboard chess move generator and alpha-beta search core
 * Copyright (C) 2026 Talon contributors
 *
 * Talon is free software: you can redistribute it and/or modify it under the
 * terms of the GNU General Public License as published by the Free Software
 * Foundation, either version 3 of the License, or (at your option) any later
 * version.
 *
 * Talon is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
 * FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
 * details.
 *
 * You should have received a copy of the GNU General Public License along with
 * Talon. If not, see <https://www.gnu.org/licenses/>.
 */

//! A transposition table owned exclusively by the search thread.

use std::collections::HashMap;

use crate::{
    eval::{Eval, Ply, MATE_BOUND},
    movegen::Move,
    position::HashableState,
};

#[cfg(test)]
use crate::position::Position;

/// The bound of a score depending on how it was obtained.
#[derive(Clone, Copy, Eq, PartialEq)]
pub enum Bound {
    /// A lower bound: `best_score >= beta`.
    Lower,
    /// An exact bound: `alpha < best_score < beta`.
    Exact,
    /// An upper bound: `best_score <= alpha`.
    Upper,
}

/// A single entry in the transposition table.
#[derive(Clone, Copy)]
pub struct TtEntry {
    /// The depth at which the score was obtained.
    depth: u8,
    /// The score of the position, mate-distance-normalised relative to the
    /// root.
    score: Eval,
    /// The bound of the score.
    bound: Bound,
    /// The best move found in the position, if any.
    best_move: Option<Move>,
}

/// A hash table from [`HashableState`] to [`TtEntry`], used to avoid
/// re-searching positions reached by transposition.
///
/// Unlike a UCI engine's table, this one is never shared across threads, so
/// it needs no locking or atomics: it is a plain [`HashMap`] owned by the
/// single search thread that uses it.
pub struct TranspositionTable {
    table: HashMap<HashableState, TtEntry>,
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TranspositionTable {
    /// Creates a new, empty transposition table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Empties the table.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Looks up `state`, de-normalising any mate score to be relative to
    /// `ply` rather than the root.
    #[must_use]
    pub fn load(&self, state: HashableState, ply: Ply) -> Option<TtEntry> {
        self.table.get(&state).map(|entry| TtEntry {
            score: denormalise(entry.score, ply),
            ..*entry
        })
    }

    /// Stores an entry for `state`, normalising any mate score to be
    /// relative to the root rather than `ply`.
    ///
    /// Uses the 'always-replace' strategy.
    pub fn store(
        &mut self,
        state: HashableState,
        depth: u8,
        score: Eval,
        bound: Bound,
        best_move: Option<Move>,
        ply: Ply,
    ) {
        self.table.insert(
            state,
            TtEntry {
                depth,
                score: normalise(score, ply),
                bound,
                best_move,
            },
        );
    }
}

impl TtEntry {
    /// Returns the depth at which the score was obtained.
    #[must_use]
    pub const fn depth(&self) -> u8 {
        self.depth
    }

    /// Returns the score.
    #[must_use]
    pub const fn score(&self) -> Eval {
        self.score
    }

    /// Returns the bound of the score.
    #[must_use]
    pub const fn bound(&self) -> Bound {
        self.bound
    }

    /// Returns the best move found in the position, if any.
    #[must_use]
    pub const fn best_move(&self) -> Option<Move> {
        self.best_move
    }
}

/// If `score` is a mate score relative to the root, turns it into a mate
/// score relative to the current ply, so it stays correct when reused deeper
/// or shallower in the tree.
fn normalise(score: Eval, ply: Ply) -> Eval {
    if score <= -MATE_BOUND {
        score - Eval::from(ply)
    } else if score >= MATE_BOUND {
        score + Eval::from(ply)
    } else {
        score
    }
}

/// If `score` is a mate score relative to the current ply, turns it into a
/// mate score relative to the root.
fn denormalise(score: Eval, ply: Ply) -> Eval {
    if score <= -MATE_BOUND {
        score + Eval::from(ply)
    } else if score >= MATE_BOUND {
        score - Eval::from(ply)
    } else {
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_entry_round_trips_through_mate_normalisation() {
        let mut tt = TranspositionTable::new();
        let state = Position::default().hashable_state();

        tt.store(state, 5, MATE_BOUND + 2, Bound::Exact, None, 3);
        let hit = tt.load(state, 3).unwrap();

        assert_eq!(hit.score(), MATE_BOUND + 2);
    }

    #[test]
    fn non_mate_scores_are_unaffected_by_ply() {
        assert_eq!(normalise(120, 7), 120);
        assert_eq!(denormalise(120, 7), 120);
    }
}
