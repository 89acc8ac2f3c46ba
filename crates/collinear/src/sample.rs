//! Deterministic random point sets for tests, benches, and demos.
//!
//! Model
//! - Draws are parameterized by a small cfg struct and made reproducible by
//!   a [`ReplayToken`] `(seed, index)` mixed into a single `StdRng`, so any
//!   failing case can be replayed from its token alone.
//! - All draws return distinct points in canonical ascending order, i.e.
//!   input that `validate::PointSet` accepts by construction.
//!
//! Code cross-refs: consumed by `detect::tests`, `benches/detect_bench.rs`,
//! `examples/planted_runs.rs`, and the `gen` subcommand of the cli crate.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;

/// Uniform scatter over the integer grid `[0, max_coord]^2`.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    pub count: usize,
    pub max_coord: i32,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self { count: 32, max_coord: 32_767 }
    }
}

/// Scatter with collinear runs planted before the uniform fill.
#[derive(Clone, Copy, Debug)]
pub struct PlantedCfg {
    pub scatter: ScatterCfg,
    /// Number of collinear runs to plant.
    pub runs: usize,
    /// Points per planted run; at least 2.
    pub run_len: usize,
}

impl Default for PlantedCfg {
    fn default() -> Self {
        Self { scatter: ScatterCfg::default(), runs: 2, run_len: 5 }
    }
}

/// Replay token making draws reproducible and indexable within one seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style avalanche, so that consecutive indexes do not
        // yield correlated streams.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let key = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(key)
    }
}

/// Attempts per placement before a draw gives up. Guards dense grids.
const MAX_TRIES: usize = 1_000;

/// Direction palette for planted runs: coprime steps covering horizontal,
/// vertical, diagonal, and four rational slopes.
const RUN_DIRS: [(i32, i32); 8] = [
    (1, 0),
    (0, 1),
    (1, 1),
    (1, -1),
    (1, 2),
    (2, 1),
    (1, -2),
    (2, -1),
];

/// Draw `cfg.count` distinct points uniformly on the grid.
///
/// Returns `None` when the grid cannot hold the requested count or rejection
/// sampling exhausts its budget near capacity.
pub fn draw_scatter(cfg: ScatterCfg, tok: ReplayToken) -> Option<Vec<Point>> {
    let mut rng = tok.to_std_rng();
    let mut set = BTreeSet::new();
    fill_scatter(&mut set, cfg, &mut rng)?;
    Some(set.into_iter().collect())
}

/// Draw a scatter with `cfg.runs` collinear runs of `cfg.run_len` points
/// planted first; the remainder of `cfg.scatter.count` is uniform fill.
///
/// Planted points count toward `cfg.scatter.count`, so the result length is
/// always exactly `cfg.scatter.count`.
pub fn draw_planted(cfg: PlantedCfg, tok: ReplayToken) -> Option<Vec<Point>> {
    if cfg
        .runs
        .checked_mul(cfg.run_len)
        .is_none_or(|planted| planted > cfg.scatter.count)
    {
        return None;
    }
    let mut rng = tok.to_std_rng();
    let mut set = BTreeSet::new();
    for _ in 0..cfg.runs {
        plant_run(&mut set, cfg, &mut rng)?;
    }
    fill_scatter(&mut set, cfg.scatter, &mut rng)?;
    Some(set.into_iter().collect())
}

fn fill_scatter(set: &mut BTreeSet<Point>, cfg: ScatterCfg, rng: &mut StdRng) -> Option<()> {
    if cfg.max_coord < 0 {
        return None;
    }
    let side = i64::from(cfg.max_coord) + 1;
    if cfg.count as u128 > (side * side) as u128 {
        return None;
    }
    while set.len() < cfg.count {
        let mut placed = false;
        for _ in 0..MAX_TRIES {
            let p = Point::new(
                rng.gen_range(0..=cfg.max_coord),
                rng.gen_range(0..=cfg.max_coord),
            );
            if set.insert(p) {
                placed = true;
                break;
            }
        }
        if !placed {
            return None;
        }
    }
    Some(())
}

fn plant_run(set: &mut BTreeSet<Point>, cfg: PlantedCfg, rng: &mut StdRng) -> Option<()> {
    let max = cfg.scatter.max_coord;
    if max < 0 || cfg.run_len < 2 {
        return None;
    }
    'attempt: for _ in 0..MAX_TRIES {
        let anchor = Point::new(rng.gen_range(0..=max), rng.gen_range(0..=max));
        let (dx, dy) = RUN_DIRS[rng.gen_range(0..RUN_DIRS.len())];
        let stride = rng.gen_range(1..=2i64);
        let mut run = Vec::with_capacity(cfg.run_len);
        for k in 0..cfg.run_len {
            let step = k as i64 * stride;
            let x = i64::from(anchor.x) + step * i64::from(dx);
            let y = i64::from(anchor.y) + step * i64::from(dy);
            if x < 0 || y < 0 || x > i64::from(max) || y > i64::from(max) {
                continue 'attempt;
            }
            let p = Point::new(x as i32, y as i32);
            if set.contains(&p) {
                continue 'attempt;
            }
            run.push(p);
        }
        set.extend(run);
        return Some(());
    }
    None
}
