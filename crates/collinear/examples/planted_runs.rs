//! Timing probe for the two detectors on a planted input.
//!
//! Usage:
//!   cargo run -p collinear --release --example planted_runs -- [count]
//!
//! Draws `count` points (default 64) with two planted 5-point runs, times
//! both detectors, and checks the containment invariant: every maximal
//! segment the fast detector reports must appear among the brute-force
//! emissions.

use std::collections::BTreeSet;
use std::time::Instant;

use collinear::detect::{brute, fast};
use collinear::sample::{draw_planted, PlantedCfg, ReplayToken, ScatterCfg};
use collinear::LineSegment;

fn main() {
    let count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(64usize);
    let cfg = PlantedCfg {
        scatter: ScatterCfg { count, max_coord: 255 },
        runs: 2,
        run_len: 5,
    };
    let tok = ReplayToken { seed: 2025, index: 0 };
    let points = draw_planted(cfg, tok).expect("planted draw fits the grid");

    let fast_start = Instant::now();
    let fast_segs = fast::segments(&points).expect("valid input");
    let fast_ms = fast_start.elapsed().as_secs_f64() * 1e3;

    let brute_start = Instant::now();
    let brute_segs = brute::segments(&points).expect("valid input");
    let brute_ms = brute_start.elapsed().as_secs_f64() * 1e3;

    let fast_out: BTreeSet<LineSegment> = fast_segs.iter().copied().collect();
    let brute_out: BTreeSet<LineSegment> = brute_segs.iter().copied().collect();
    assert!(
        fast_out.is_subset(&brute_out),
        "fast output escaped the brute-force emissions"
    );

    println!(
        "points={count} planted_runs={} run_len={}",
        cfg.runs, cfg.run_len
    );
    println!("fast_segments={} fast_time_ms={fast_ms:.3}", fast_segs.len());
    println!(
        "brute_emissions={} distinct={} brute_time_ms={brute_ms:.3}",
        brute_segs.len(),
        brute_out.len()
    );
    for seg in &fast_out {
        println!("maximal {seg}");
    }
}
