//! Move generation benchmark for profiling with cargo-flamegraph.
//!
//! Runs legal_moves_into many times on positions from each phase of the game.
//!
//! Usage:
//!   cargo flamegraph --example movegen_bench -p baghchal_core

use baghchal_core::{GameState, legal_moves_into};
use std::time::Instant;

/// Positions covering placement, relocation and capture-heavy play
const TEST_POSITIONS: &[(&str, &str)] = &[
    ("Opening", "T...T/...../...../...../T...T g 20 0"),
    ("Jump", "T...T/.G.../...../...../T...T t 19 0"),
    ("Midgame", "T.G.T/.GG../G.T../...G./..G.T t 14 0"),
    ("Relocation", "TGGGT/GGGGG/GGGGG/GGG../T...T g 0 4"),
    ("Tigers", "TGGGT/GGGGG/GGGGG/GGG../T...T t 0 4"),
    ("Blocked", "TGGGT/GG.GG/G.G.G/GG.GG/TGGGT t 3 0"),
];

const ITERATIONS: usize = 200_000;

fn main() {
    println!("=== Move Generation Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let mut move_buf = Vec::with_capacity(64);
    let mut total_moves = 0usize;
    let mut total_time = std::time::Duration::ZERO;

    for (name, layout) in TEST_POSITIONS {
        let state = match GameState::from_layout(layout) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };

        print!("{name:.<20}");

        let start = Instant::now();
        let mut moves_generated = 0usize;

        for _ in 0..ITERATIONS {
            legal_moves_into(&state, &mut move_buf);
            moves_generated += move_buf.len();
        }

        let elapsed = start.elapsed();
        total_moves += moves_generated;
        total_time += elapsed;

        let moves_per_pos = moves_generated as f64 / ITERATIONS as f64;
        let mps = if elapsed.as_secs_f64() > 0.0 {
            ITERATIONS as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {moves_per_pos:>5.1} moves/pos, {mps:>10.0} pos/sec ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    let avg_mps = if total_time.as_secs_f64() > 0.0 {
        (ITERATIONS * TEST_POSITIONS.len()) as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_moves} moves in {total_time:.3?} ({avg_mps:.0} positions/sec)");
}
