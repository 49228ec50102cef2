//! Reproducible random point clouds.
//!
//! Model
//! - Grid coordinates drawn uniformly from configured integer ranges, so
//!   the exact orientation predicate stays reliable downstream.
//! - Determinism uses a replay token `(seed, index)` mixed into a single
//!   RNG; identical tokens reproduce identical clouds across runs.

use crate::point::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// Point-cloud sampler configuration.
#[derive(Clone, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub x_range: Range<i32>,
    pub y_range: Range<i32>,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 24,
            x_range: 0..512,
            y_range: 0..512,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` grid points. Duplicates are possible on small ranges;
/// the scan tolerates them.
pub fn draw_point_cloud(cfg: &CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..cfg.count)
        .map(|_| {
            let x = rng.gen_range(cfg.x_range.clone());
            let y = rng.gen_range(cfg.y_range.clone());
            Point::new(f64::from(x), f64::from(y))
        })
        .collect()
}
