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

//! Precomputed per-square attack masks and the blocker-scan algorithm used to
//! turn a ray mask into an actual sliding attack given the current
//! occupancies.
//!
//! Deliberately not magic bitboards: every ray is walked to the first blocker
//! at query time. This is slower than a magic lookup but needs no build-time
//! table generation, and move generation is not the dominant cost of this
//! engine's search.

use lazy_static::lazy_static;

use crate::{
    bitboard::Bitboard,
    defs::{File, Rank, Side, Square},
};

/// One of the four directions a rook ray can run in, in index order used by
/// [`RAYS`].
const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
/// One of the four directions a bishop ray can run in, in index order used by
/// [`RAYS`].
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Whether a direction's square index increases (`true`) or decreases
/// (`false`) with every step away from the origin. Determines whether the
/// nearest blocker is found via the lowest or highest set bit.
const ROOK_DIR_INCREASES: [bool; 4] = [true, true, false, false];
/// See [`ROOK_DIR_INCREASES`], for bishop rays.
const BISHOP_DIR_INCREASES: [bool; 4] = [true, false, false, true];

/// Precomputed attack masks: non-sliding pieces get one mask per square;
/// sliding pieces get one ray per direction per square, to be cut off at the
/// first blocker by [`AttackTables::rook_attacks`]/[`AttackTables::bishop_attacks`].
pub struct AttackTables {
    /// Indexed by `[side][square]`.
    pawn: [[Bitboard; Square::TOTAL]; Side::TOTAL],
    /// Indexed by `[square]`.
    knight: [Bitboard; Square::TOTAL],
    /// Indexed by `[square]`.
    king: [Bitboard; Square::TOTAL],
    /// Indexed by `[square][direction]`, directions ordered as
    /// [`ROOK_DIRS`].
    rook_rays: [[Bitboard; 4]; Square::TOTAL],
    /// Indexed by `[square][direction]`, directions ordered as
    /// [`BISHOP_DIRS`].
    bishop_rays: [[Bitboard; 4]; Square::TOTAL],
    /// Indexed by `[a][b]`: the squares strictly between `a` and `b`,
    /// exclusive of both, if they are aligned on a rank, file or diagonal;
    /// empty otherwise. Used to find pinned pieces and squares a king must
    /// cross to castle.
    between: Box<[[Bitboard; Square::TOTAL]; Square::TOTAL]>,
}

lazy_static! {
    /// The single, process-wide set of attack tables.
    pub static ref ATTACKS: AttackTables = AttackTables::new();
}

/// Walks from `square` in direction `(file_delta, rank_delta)` until falling
/// off the board, returning every square visited (excluding `square`
/// itself).
fn ray(square: Square, file_delta: i8, rank_delta: i8) -> Bitboard {
    let mut bb = Bitboard::empty();
    let mut file = i16::from(File::from(square).0) + i16::from(file_delta);
    let mut rank = i16::from(Rank::from(square).0) + i16::from(rank_delta);

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        bb |= Bitboard::from(Square::from_pos(
            Rank(u8::try_from(rank).unwrap_or(0)),
            File(u8::try_from(file).unwrap_or(0)),
        ));
        file += i16::from(file_delta);
        rank += i16::from(rank_delta);
    }

    bb
}

/// Every square reachable by stepping `(file_delta, rank_delta)` exactly
/// once from `square`, or an empty board if that step falls off the edge.
fn step(square: Square, file_delta: i8, rank_delta: i8) -> Bitboard {
    let file = i16::from(File::from(square).0) + i16::from(file_delta);
    let rank = i16::from(Rank::from(square).0) + i16::from(rank_delta);
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Bitboard::from(Square::from_pos(
            Rank(u8::try_from(rank).unwrap_or(0)),
            File(u8::try_from(file).unwrap_or(0)),
        ))
    } else {
        Bitboard::empty()
    }
}

impl AttackTables {
    /// Builds the full set of attack tables.
    #[allow(clippy::missing_inline_in_public_items)]
    fn new() -> Self {
        let mut pawn = [[Bitboard::empty(); Square::TOTAL]; Side::TOTAL];
        let mut knight = [Bitboard::empty(); Square::TOTAL];
        let mut king = [Bitboard::empty(); Square::TOTAL];
        let mut rook_rays = [[Bitboard::empty(); 4]; Square::TOTAL];
        let mut bishop_rays = [[Bitboard::empty(); 4]; Square::TOTAL];

        for index in 0..Square::TOTAL {
            let square = Square(index as u8);

            pawn[Side::WHITE.to_index()][index] =
                step(square, 1, 1) | step(square, -1, 1);
            pawn[Side::BLACK.to_index()][index] =
                step(square, 1, -1) | step(square, -1, -1);

            knight[index] = step(square, 1, 2)
                | step(square, 2, 1)
                | step(square, 2, -1)
                | step(square, 1, -2)
                | step(square, -1, -2)
                | step(square, -2, -1)
                | step(square, -2, 1)
                | step(square, -1, 2);

            king[index] = step(square, 1, 1)
                | step(square, 1, 0)
                | step(square, 1, -1)
                | step(square, 0, -1)
                | step(square, -1, -1)
                | step(square, -1, 0)
                | step(square, -1, 1)
                | step(square, 0, 1);

            for (dir, &(file_delta, rank_delta)) in ROOK_DIRS.iter().enumerate() {
                rook_rays[index][dir] = ray(square, file_delta, rank_delta);
            }
            for (dir, &(file_delta, rank_delta)) in BISHOP_DIRS.iter().enumerate() {
                bishop_rays[index][dir] = ray(square, file_delta, rank_delta);
            }
        }

        let between = Box::new(Self::build_between_table());

        Self {
            pawn,
            knight,
            king,
            rook_rays,
            bishop_rays,
            between,
        }
    }

    /// Builds the `between` table by walking each of the eight rook and
    /// bishop directions from every square, recording the squares crossed so
    /// far before each visited square is added to the accumulator.
    fn build_between_table() -> [[Bitboard; Square::TOTAL]; Square::TOTAL] {
        let mut between = [[Bitboard::empty(); Square::TOTAL]; Square::TOTAL];

        for index in 0..Square::TOTAL {
            let origin = Square(index as u8);
            for &(file_delta, rank_delta) in ROOK_DIRS.iter().chain(BISHOP_DIRS.iter()) {
                let mut acc = Bitboard::empty();
                let mut file = i16::from(File::from(origin).0) + i16::from(file_delta);
                let mut rank = i16::from(Rank::from(origin).0) + i16::from(rank_delta);
                while (0..8).contains(&file) && (0..8).contains(&rank) {
                    let visited = Square::from_pos(
                        Rank(u8::try_from(rank).unwrap_or(0)),
                        File(u8::try_from(file).unwrap_or(0)),
                    );
                    between[index][visited.to_index()] = acc;
                    acc |= Bitboard::from(visited);
                    file += i16::from(file_delta);
                    rank += i16::from(rank_delta);
                }
            }
        }

        between
    }

    /// The squares a pawn of the given side on `square` attacks.
    #[must_use]
    pub fn pawn_attacks(&self, side: Side, square: Square) -> Bitboard {
        self.pawn[side.to_index()][square.to_index()]
    }

    /// The squares a knight on `square` attacks.
    #[must_use]
    pub fn knight_attacks(&self, square: Square) -> Bitboard {
        self.knight[square.to_index()]
    }

    /// The squares a king on `square` attacks (not including castling).
    #[must_use]
    pub fn king_attacks(&self, square: Square) -> Bitboard {
        self.king[square.to_index()]
    }

    /// The squares a rook on `square` attacks, given board occupancies
    /// `occupancies`, found by scanning each of the four rook rays to its
    /// first blocker.
    #[must_use]
    pub fn rook_attacks(&self, square: Square, occupancies: Bitboard) -> Bitboard {
        let mut attacks = Bitboard::empty();
        for dir in 0..4 {
            attacks |= cut_ray_at_first_blocker(
                self.rook_rays[square.to_index()][dir],
                occupancies,
                ROOK_DIR_INCREASES[dir],
                &self.rook_rays,
            );
        }
        attacks
    }

    /// The squares a bishop on `square` attacks, given board occupancies
    /// `occupancies`, found by scanning each of the four bishop rays to its
    /// first blocker.
    #[must_use]
    pub fn bishop_attacks(&self, square: Square, occupancies: Bitboard) -> Bitboard {
        let mut attacks = Bitboard::empty();
        for dir in 0..4 {
            attacks |= cut_ray_at_first_blocker(
                self.bishop_rays[square.to_index()][dir],
                occupancies,
                BISHOP_DIR_INCREASES[dir],
                &self.bishop_rays,
            );
        }
        attacks
    }

    /// The squares a queen on `square` attacks: the union of its rook and
    /// bishop attacks.
    #[must_use]
    pub fn queen_attacks(&self, square: Square, occupancies: Bitboard) -> Bitboard {
        self.rook_attacks(square, occupancies) | self.bishop_attacks(square, occupancies)
    }

    /// The squares strictly between `a` and `b`, exclusive of both, if they
    /// lie on a common rank, file or diagonal; an empty bitboard otherwise.
    #[must_use]
    pub fn squares_between(&self, a: Square, b: Square) -> Bitboard {
        self.between[a.to_index()][b.to_index()]
    }
}

/// Cuts `full_ray` (the unobstructed ray from some origin square) off at the
/// first blocker found in `occupancies`, using `rays_by_square` (the same
/// direction's ray table) to find and subtract the portion of the ray beyond
/// that blocker.
///
/// `increases` says whether squares further along the ray have a higher
/// index than squares closer to the origin, which determines whether the
/// nearest blocker is the lowest or highest set bit.
fn cut_ray_at_first_blocker(
    full_ray: Bitboard,
    occupancies: Bitboard,
    increases: bool,
    rays_by_square: &[[Bitboard; 4]; Square::TOTAL],
) -> Bitboard {
    let blockers = full_ray & occupancies;
    if blockers.is_empty() {
        return full_ray;
    }

    let blocker_square = if increases {
        Square(blockers.0.trailing_zeros() as u8)
    } else {
        Square(63 - blockers.0.leading_zeros() as u8)
    };

    // Find which of the four directions at `blocker_square` continues the
    // same ray: it is the one whose mask is a subset of `full_ray`.
    for rays in rays_by_square[blocker_square.to_index()] {
        if !(rays & !full_ray).is_empty() {
            continue;
        }
        return full_ray ^ rays;
    }
    // The blocker square is the far end of the ray: nothing to subtract.
    full_ray
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_attacks_on_empty_board_span_full_rank_and_file() {
        let attacks = ATTACKS.rook_attacks(Square::A1, Bitboard::empty());
        assert_eq!(attacks.count_bits(), 14);
    }

    #[test]
    fn rook_attacks_stop_at_first_blocker() {
        // Rook on a1, blocker on a4: can see a2, a3, a4 but not a5+.
        let occ = Bitboard::from(Square(24)); // a4
        let attacks = ATTACKS.rook_attacks(Square::A1, occ);
        assert!(!(attacks & Bitboard::from(Square(24))).is_empty());
        assert!((attacks & Bitboard::from(Square(32))).is_empty()); // a5
    }

    #[test]
    fn bishop_attacks_on_empty_board_from_corner() {
        let attacks = ATTACKS.bishop_attacks(Square::A1, Bitboard::empty());
        assert_eq!(attacks.count_bits(), 7);
    }

    #[test]
    fn knight_attacks_from_corner_has_two_targets() {
        assert_eq!(ATTACKS.knight_attacks(Square::A1).count_bits(), 2);
    }

    #[test]
    fn king_attacks_from_corner_has_three_targets() {
        assert_eq!(ATTACKS.king_attacks(Square::A1).count_bits(), 3);
    }

    #[test]
    fn squares_between_spans_a_rank() {
        // a1 to h1: f1, g1 lie strictly between e1 and h1.
        let between = ATTACKS.squares_between(Square::E1, Square::H1);
        assert_eq!(between.count_bits(), 2);
    }

    #[test]
    fn squares_between_is_empty_for_unaligned_squares() {
        // a1 to b3: a knight's-move apart, not aligned on any line.
        assert!(ATTACKS.squares_between(Square::A1, Square(17)).is_empty());
    }
}
