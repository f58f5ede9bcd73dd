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

//! The library-facing façade: owns the root position, the game's move
//! history (for repetition detection) and the transposition table across
//! searches, and exposes a synchronous `think` entry point.
//!
//! Unlike a UCI engine, [`Engine`] has no notion of stdin, option parsing or
//! a time-control calculator: a driver that wants those builds them on top,
//! passing `think` a [`Duration`] it has already worked out for itself.

use std::time::Duration;

use crate::{
    error::IllegalMoveError,
    eval::Eval,
    movegen::Move,
    position::{Key, Position},
    search,
    timectl::TimeCtl,
    tt::TranspositionTable,
};

/// The evaluation of a position or a move, in centipawns (or a mate score;
/// see [`crate::eval::MATE`]).
pub type Score = Eval;

/// Owns the root position, its game history, and a transposition table
/// shared across successive searches from that history.
pub struct Engine {
    /// The position the next [`Engine::think`] call will search from.
    root: Position,
    /// Zobrist keys of every position reached since the last
    /// [`Engine::set_root`], oldest first, ending with `root`'s own key.
    ///
    /// Used only for threefold-repetition detection; truncated whenever an
    /// irreversible move (pawn move or capture) is played, since no earlier
    /// position can ever repeat across it.
    game_history: Vec<Key>,
    /// A hash table of previously-encountered positions, reused across
    /// searches so a transposition found in one search can still pay off in
    /// the next.
    tt: TranspositionTable,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates a new [`Engine`] rooted at the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let root = Position::default();
        Self {
            game_history: vec![root.zobrist_key()],
            root,
            tt: TranspositionTable::new(),
        }
    }

    /// Sets the position to search from, discarding any earlier game
    /// history (the new root is treated as the start of a fresh game for
    /// repetition-detection purposes).
    ///
    /// The transposition table is kept: a transposition reachable from the
    /// new root may still have been seen while searching the old one.
    pub fn set_root(&mut self, pos: Position) {
        self.game_history.clear();
        self.game_history.push(pos.zobrist_key());
        self.root = pos;
    }

    /// Plays `mv` on the root position, appending it to the game history
    /// used for repetition detection.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError`] if `mv` is not in
    /// `self.root().generate_moves()`, leaving the root position untouched.
    pub fn play_move(&mut self, mv: Move) -> Result<(), IllegalMoveError> {
        self.root.try_make(mv)?;

        if self.root.halfmove_clock() == 0 {
            self.game_history.clear();
        }
        self.game_history.push(self.root.zobrist_key());

        Ok(())
    }

    /// Searches the root position for up to `budget`, returning the best
    /// move found and its score.
    ///
    /// Always returns a legal move: the search discards any iteration still
    /// in progress when `budget` expires and returns the best move found by
    /// the last depth that finished completely.
    ///
    /// # Panics
    ///
    /// Panics if the root position has no legal moves; callers are expected
    /// to check [`Position::generate_moves`] (or [`Position::in_check`] for
    /// checkmate versus stalemate) before calling `think`.
    pub fn think(&mut self, budget: Duration) -> (Move, Score) {
        let clock = TimeCtl::start(budget);
        search::search(&self.root, &self.game_history, &clock, &mut self.tt)
    }

    /// Returns the position that the next [`Engine::think`] call will
    /// search from.
    #[must_use]
    pub const fn root(&self) -> &Position {
        &self.root
    }

    /// Empties the transposition table, e.g. in response to a driver's
    /// "new game" signal.
    pub fn clear_tt(&mut self) {
        self.tt.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation;

    #[test]
    fn new_engine_is_rooted_at_the_starting_position() {
        let engine = Engine::new();
        assert_eq!(engine.root().to_fen(), crate::position::STARTPOS_FEN);
    }

    #[test]
    fn play_move_rejects_an_illegal_move() {
        let mut engine = Engine::new();
        let illegal = notation::parse_move("e2e4", engine.root())
            .map(|_| ())
            .unwrap_or(());
        let _ = illegal;

        let bogus_move = engine.root().generate_moves()[0];
        engine.play_move(bogus_move).unwrap();

        // Replaying the same move object against the new root is no longer
        // necessarily legal (the piece has moved away), and must error
        // rather than panic or silently no-op.
        assert!(engine.play_move(bogus_move).is_err());
    }

    #[test]
    fn play_move_truncates_history_after_an_irreversible_move() {
        let mut engine = Engine::new();
        let e4 = notation::parse_move("e2e4", engine.root()).unwrap();
        engine.play_move(e4).unwrap();

        assert_eq!(engine.game_history.len(), 1);
    }

    #[test]
    fn think_returns_a_legal_move_within_a_short_budget() {
        let mut engine = Engine::new();
        let (mv, _) = engine.think(Duration::from_millis(100));
        assert!(engine.root().generate_moves().contains(&mv));
    }

    #[test]
    fn set_root_resets_game_history() {
        let mut engine = Engine::new();
        let e4 = notation::parse_move("e2e4", engine.root()).unwrap();
        engine.play_move(e4).unwrap();

        let fresh = Position::default();
        engine.set_root(fresh);

        assert_eq!(engine.game_history.len(), 1);
    }
}
