//! Validated binning input shared by all strategies

use crate::error::{Error, Result};
use crate::grid::{GridSpec, GridTolerance};
use crate::numeric::BinFloat;
use crate::transform::{BinnedSample, CoordinateTransform};
use crate::weights::normalize_weights;

/// Samples, grid and weights after validation and weight normalization
///
/// Construction performs every precondition check in a fixed order: finite
/// values in data, grid and weights, then grid shape, then weight length and
/// sign. A strategy receiving a `PreparedInput` cannot fail.
#[derive(Debug, Clone)]
pub struct PreparedInput<'a, T: BinFloat = f64> {
    data: &'a [T],
    grid: GridSpec<T>,
    weights: Vec<T>,
}

impl<'a, T: BinFloat> PreparedInput<'a, T> {
    /// Validate inputs with the default grid tolerance
    pub fn new(data: &'a [T], grid_points: &[T], weights: Option<&[T]>) -> Result<Self> {
        Self::with_tolerance(data, grid_points, weights, GridTolerance::default())
    }

    /// Validate inputs with an explicit grid tolerance
    pub fn with_tolerance(
        data: &'a [T],
        grid_points: &[T],
        weights: Option<&[T]>,
        tolerance: GridTolerance,
    ) -> Result<Self> {
        Error::check_finite(data, "data")?;
        Error::check_finite(grid_points, "grid_points")?;
        if let Some(weights) = weights {
            Error::check_finite(weights, "weights")?;
        }

        let grid = GridSpec::with_tolerance(grid_points, tolerance)?;
        let weights = normalize_weights(weights, data.len())?;

        Ok(Self {
            data,
            grid,
            weights,
        })
    }

    /// Raw sample values
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// The validated grid
    pub fn grid(&self) -> &GridSpec<T> {
        &self.grid
    }

    /// Normalized weights, one per sample
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Number of samples (N)
    pub fn num_samples(&self) -> usize {
        self.data.len()
    }

    /// Decomposed in-range samples, in input order
    pub fn samples(&self) -> impl Iterator<Item = BinnedSample<T>> + '_ {
        let transform = CoordinateTransform::new(self.grid);
        self.data
            .iter()
            .zip(self.weights.iter())
            .filter_map(move |(&value, &weight)| transform.decompose(value, weight))
    }
}
