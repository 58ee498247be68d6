//! Worked examples and error cases through the public API

mod common;

use common::*;
use binning_core::{BinningConfig, Error, Strategy};
use binning_linear::{Binner, Capabilities};

fn strategies() -> Vec<Binner> {
    [Strategy::Vectorized, Strategy::Accelerated]
        .into_iter()
        .map(|strategy| {
            let config = BinningConfig::new().with_strategy(strategy);
            Binner::new(config, Capabilities::all()).unwrap()
        })
        .collect()
}

#[test]
fn test_uniform_weights_example() {
    let data = [1.0, 1.5, 1.5, 2.0, 2.8, 3.0];
    let grid = [1.0, 2.0, 3.0];

    for binner in strategies() {
        let mass = binner.bin(&data, &grid, None).unwrap();
        let context = binner.active_strategy().name();
        assert_vectors_close(&mass, &[0.33333, 0.36667, 0.30000], 1e-5, context);
    }
}

#[test]
fn test_weighted_example() {
    let data = [2.0, 2.5, 3.0, 4.0];
    let grid = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let weights = [1.0, 2.0, 3.0, 4.0];

    for binner in strategies() {
        let mass = binner.bin(&data, &grid, Some(&weights[..])).unwrap();
        let context = binner.active_strategy().name();
        assert_vectors_close(&mass, &[0.0, 0.0, 0.2, 0.4, 0.4, 0.0], 1e-12, context);
    }
}

#[test]
fn test_unweighted_examples_on_shifted_grids() {
    let data = [2.0, 2.5, 3.0, 4.0];

    for binner in strategies() {
        let context = binner.active_strategy().name();

        let mass = binner.bin(&data, &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], None).unwrap();
        assert_vectors_close(&mass, &[0.0, 0.0, 0.375, 0.375, 0.25, 0.0], 1e-12, context);

        let mass = binner.bin(&data, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], None).unwrap();
        assert_vectors_close(&mass, &[0.0, 0.375, 0.375, 0.25, 0.0, 0.0], 1e-12, context);
    }
}

#[test]
fn test_sample_on_last_grid_point() {
    let grid = linspace(-1.0, 1.0, 11);
    for binner in strategies() {
        let mass = binner.bin(&[1.0], &grid, None).unwrap();
        assert_eq!(mass[10], 1.0);
        assert_relative_eq!(mass.iter().sum::<f64>(), 1.0);
    }
}

#[test]
fn test_partial_mass_when_samples_leave_the_grid() {
    // A quarter of the samples lie outside [0, 4]
    let data = [-0.5, 1.0, 2.0, 3.0, 0.5, 1.5, 2.5, 4.5];
    let grid = [0.0, 1.0, 2.0, 3.0, 4.0];

    for binner in strategies() {
        let mass = binner.bin(&data, &grid, None).unwrap();
        assert_relative_eq!(mass.iter().sum::<f64>(), 0.75, epsilon = 1e-12);
        assert!(mass.iter().all(|&m| m >= 0.0));
    }
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let data = generate_normal(5000, 0.0, 1.0, 99);
    let weights = generate_weights(5000, 100);
    let grid = linspace(-5.0, 5.0, 257);

    for binner in strategies() {
        let first = binner.bin(&data, &grid, Some(&weights[..])).unwrap();
        let second = binner.bin(&data, &grid, Some(&weights[..])).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_non_equidistant_grid_rejected() {
    for binner in strategies() {
        let err = binner.bin(&[0.5], &[0.0, 1.0, 3.0], None).unwrap_err();
        assert!(matches!(err, Error::InvalidGrid(_)), "got {err:?}");

        // Spacing far below the default absolute tolerance
        let err = binner.bin(&[1e-9], &[0.0, 1e-9, 5e-9], None).unwrap_err();
        assert!(matches!(err, Error::InvalidGrid(_)), "got {err:?}");
    }
}

#[test]
fn test_single_point_grid_rejected() {
    for binner in strategies() {
        assert!(matches!(
            binner.bin(&[0.5], &[0.0], None),
            Err(Error::InvalidGrid(_))
        ));
    }
}

#[test]
fn test_length_mismatch_rejected() {
    let data = [1.0, 2.0, 3.0, 4.0];
    let weights = [1.0, 1.0, 1.0];
    for binner in strategies() {
        match binner.bin(&data, &[0.0, 1.0, 2.0, 3.0, 4.0], Some(&weights[..])) {
            Err(Error::LengthMismatch { expected, actual }) => {
                assert_eq!((expected, actual), (4, 3));
            }
            other => panic!("expected LengthMismatch, got {other:?}"),
        }
    }
}

#[test]
fn test_non_finite_values_rejected() {
    let grid = [0.0, 1.0, 2.0];
    for binner in strategies() {
        assert!(matches!(
            binner.bin(&[0.5, f64::NAN], &grid, None),
            Err(Error::NonFinite { .. })
        ));
        assert!(matches!(
            binner.bin(&[0.5], &[0.0, f64::INFINITY], None),
            Err(Error::NonFinite { .. })
        ));
        assert!(matches!(
            binner.bin(&[0.5], &grid, Some(&[f64::NEG_INFINITY][..])),
            Err(Error::NonFinite { .. })
        ));
    }
}

#[test]
fn test_empty_data_gives_zero_mass() {
    for binner in strategies() {
        let mass = binner.bin::<f64>(&[], &[0.0, 1.0, 2.0], None).unwrap();
        assert_eq!(mass, vec![0.0; 3]);
    }
}

#[test]
fn test_f32_samples() {
    let data = [2.0f32, 2.5, 3.0, 4.0];
    let grid = [0.0f32, 1.0, 2.0, 3.0, 4.0, 5.0];
    let weights = [1.0f32, 2.0, 3.0, 4.0];
    for binner in strategies() {
        let mass = binner.bin(&data, &grid, Some(&weights[..])).unwrap();
        let expected = [0.0f32, 0.0, 0.2, 0.4, 0.4, 0.0];
        for (m, e) in mass.iter().zip(expected.iter()) {
            assert_relative_eq!(*m, *e, epsilon = 1e-6);
        }
    }
}
