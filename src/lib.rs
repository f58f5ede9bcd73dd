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

//! A bitboard move generator and alpha-beta search core for chess.
//!
//! This crate is a library: it owns board representation, move generation,
//! evaluation and search, but not a UCI loop, a renderer or a network
//! transport. See [`Engine`] for the primary entry point.

/// Precomputed attack tables for kings, knights and sliding pieces.
pub mod attacks;
/// Items associated with [`Bitboard`](bitboard::Bitboard).
pub mod bitboard;
/// Definitions and enumerations shared across the crate.
pub mod defs;
/// The [`Engine`] façade: root position, search invocation, move history.
pub mod engine;
/// Error variants returned by parsing and move application.
pub mod error;
/// Evaluation: material, phased piece-square tables and positional terms.
pub mod eval;
/// Pseudo-legal move generation and the two-class legality filter.
pub mod movegen;
/// UCI move-text encoding and decoding ("from-to[promo]").
pub mod notation;
/// The [`Position`](position::Position) type: bitboards, make/unmake, FEN.
pub mod position;
/// Iterative-deepening alpha-beta search with quiescence.
pub mod search;
/// A cooperative, atomic-flag based search deadline.
pub mod timectl;
/// A simple transposition table.
pub mod tt;

pub use engine::Engine;
pub use error::{IllegalMoveError, InvariantError, ParseError};
pub use position::Position;
