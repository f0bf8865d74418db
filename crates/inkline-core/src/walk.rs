// File: crates/inkline-core/src/walk.rs
// Summary: Seeded gaussian random-walk generation for sparkline data.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Cumulative sum of `len` standard-normal steps from a seeded generator.
/// Equal seeds produce equal series.
pub fn gaussian_walk(seed: u64, len: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut acc = 0.0f64;
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        let step: f64 = StandardNormal.sample(&mut rng);
        acc += step;
        out.push(acc);
    }
    out
}
