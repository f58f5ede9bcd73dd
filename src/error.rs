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

//! Error types returned by FEN parsing and move application.

use std::fmt::{self, Display, Formatter};

/// An error that occurs when a FEN (or a sub-token of one) cannot be parsed.
#[allow(clippy::enum_variant_names)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A token was outside an expected range (e.g. a rank with too many
    /// squares).
    ErroneousToken,
    /// Expected a token but found nothing.
    ExpectedToken,
    /// Expected a different token (e.g. a piece letter that isn't one of
    /// `pnbrqkPNBRQK`).
    InvalidToken,
    /// The FEN did not have the expected number of whitespace-separated
    /// fields.
    WrongFieldCount,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ErroneousToken => "a token was out of the expected range",
            Self::ExpectedToken => "expected a token but found none",
            Self::InvalidToken => "found an invalid token",
            Self::WrongFieldCount => "FEN did not have six whitespace-separated fields",
        })
    }
}

impl std::error::Error for ParseError {}

/// Returned by [`Position::try_make`](crate::position::Position::try_make)
/// when the given move is not present in the legal move list of the current
/// position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IllegalMoveError;

impl Display for IllegalMoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("move is not legal in the current position")
    }
}

impl std::error::Error for IllegalMoveError {}

/// Marks that an internal invariant was found to be broken: this always
/// indicates a bug in this crate rather than a user error, and should never
/// be returned in ordinary operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvariantError(pub &'static str);

impl Display for InvariantError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "internal invariant broken: {}", self.0)
    }
}

impl std::error::Error for InvariantError {}
