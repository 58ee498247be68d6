//! Mapping samples into fractional grid-index space

use crate::grid::GridSpec;
use crate::numeric::BinFloat;

/// A sample decomposed into its grid bucket and interpolation fraction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinnedSample<T: BinFloat = f64> {
    /// Index of the grid point at or below the sample
    pub bucket: usize,
    /// Distance past `bucket`, in units of the grid spacing, in `[0, 1)`
    pub fraction: T,
    /// Normalized sample weight
    pub weight: T,
}

impl<T: BinFloat> BinnedSample<T> {
    /// Share of the weight assigned to `bucket + 1`
    #[inline]
    pub fn high_share(&self) -> T {
        self.weight * self.fraction
    }

    /// Share of the weight assigned to `bucket`
    #[inline]
    pub fn low_share(&self) -> T {
        self.weight - self.high_share()
    }
}

/// Transforms raw sample values into grid coordinates `t = (x - min) / dx`
#[derive(Debug, Clone, Copy)]
pub struct CoordinateTransform<T: BinFloat = f64> {
    grid: GridSpec<T>,
}

impl<T: BinFloat> CoordinateTransform<T> {
    /// Create a transform for a validated grid
    pub fn new(grid: GridSpec<T>) -> Self {
        Self { grid }
    }

    /// The grid this transform maps onto
    pub fn grid(&self) -> &GridSpec<T> {
        &self.grid
    }

    /// Fractional grid index of a value; may fall outside `[0, M - 1]`
    #[inline]
    pub fn transform(&self, value: T) -> T {
        (value - self.grid.min()) / self.grid.dx()
    }

    /// Split a sample into bucket and fraction
    ///
    /// Returns `None` for values outside `[min, max]`; their mass is dropped.
    /// The range test happens in data space so the last grid point never
    /// falls out through rounding of the division.
    #[inline]
    pub fn decompose(&self, value: T, weight: T) -> Option<BinnedSample<T>> {
        if !self.grid.contains(value) {
            return None;
        }

        let last = self.grid.num_points() - 1;
        if value == self.grid.max() {
            return Some(BinnedSample {
                bucket: last,
                fraction: T::zero(),
                weight,
            });
        }

        let t = self.transform(value);
        let integral = t.floor();
        let bucket = integral.to_usize().unwrap_or(0).min(last);
        let fraction = (t - integral).max(T::zero()).min(T::one());

        Some(BinnedSample {
            bucket,
            fraction,
            weight,
        })
    }
}
