//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

pub const EPSILON: f64 = 1e-10;

/// Install a test subscriber once; honours RUST_LOG
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// `num` equally spaced points from `start` to `stop` inclusive
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    let step = (stop - start) / (num - 1) as f64;
    (0..num)
        .map(|i| if i == num - 1 { stop } else { start + step * i as f64 })
        .collect()
}

/// Seeded normal samples
pub fn generate_normal(n: usize, mean: f64, std_dev: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(mean, std_dev).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

/// Seeded uniform samples in `[min, max)`
pub fn generate_uniform(n: usize, min: f64, max: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(min..max)).collect()
}

/// Seeded positive weights
pub fn generate_weights(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0.01..10.0)).collect()
}

/// Named datasets with different shapes, all finite
pub fn generate_test_datasets() -> Vec<(&'static str, Vec<f64>)> {
    vec![
        ("single", vec![0.25]),
        ("tiny", vec![-1.0, 0.0, 1.0]),
        ("duplicates", vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0]),
        ("on_grid_points", linspace(-4.0, 4.0, 33)),
        ("random_normal", generate_normal(1000, 0.0, 1.0, 42)),
        ("random_uniform", generate_uniform(1000, -4.0, 4.0, 7)),
        ("with_outliers", {
            let mut data = generate_normal(500, 0.0, 1.0, 3);
            data[0] = -100.0;
            data[499] = 100.0;
            data
        }),
        ("large_values", generate_uniform(200, 1e6, 1e6 + 8.0, 11)),
    ]
}

/// Assert two vectors are equal within an absolute tolerance
pub fn assert_vectors_close(actual: &[f64], expected: &[f64], tolerance: f64, context: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch for {context}"
    );
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            (a - e).abs() <= tolerance,
            "{context}: index {i} differs, actual {a}, expected {e}, diff {:e}",
            (a - e).abs()
        );
    }
}
