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

//! A small, non-interactive perft benchmark: no stdin loop, no protocol, no
//! board rendering. Prints node counts, elapsed time and nodes-per-second
//! for a fixed set of reference positions.

use std::time::Instant;

use talon::position::Position;

/// A reference position and the perft count expected at `depth`.
struct Case {
    /// Short label printed alongside the result.
    name: &'static str,
    /// The FEN to search from.
    fen: &'static str,
    /// How many plies to search.
    depth: u32,
    /// The published leaf-node count at `depth`.
    expected: u64,
}

const CASES: &[Case] = &[
    Case {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depth: 5,
        expected: 4_865_609,
    },
    Case {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depth: 4,
        expected: 4_085_603,
    },
];

/// Counts the leaf nodes reachable `depth` moves from `pos`.
fn perft(pos: &mut Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = pos.generate_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        pos.make(mv);
        nodes += perft(pos, depth - 1);
        pos.unmake();
    }
    nodes
}

fn main() {
    for case in CASES {
        let mut pos: Position = case.fen.parse().expect("benchmark FEN is valid");

        let start = Instant::now();
        let nodes = perft(&mut pos, case.depth);
        let elapsed = start.elapsed();

        if let Err(err) = pos.audit() {
            println!("{:<10} left the position corrupt after perft: {err}", case.name);
            continue;
        }

        let nps = if elapsed.as_secs_f64() > 0.0 {
            (nodes as f64 / elapsed.as_secs_f64()) as u64
        } else {
            0
        };

        let status = if nodes == case.expected { "ok" } else { "MISMATCH" };
        println!(
            "{:<10} depth {}: {nodes} nodes in {:.3}s ({nps} nps) [{status}, expected {}]",
            case.name,
            case.depth,
            elapsed.as_secs_f64(),
            case.expected,
        );
    }
}
