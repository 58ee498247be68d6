//! Equidistant grid validation
//!
//! Linear binning only makes sense on a grid with constant spacing, so every
//! binning call goes through [`GridSpec::with_tolerance`] before any sample is
//! touched. The spacing check mirrors an "all-close" comparison of every
//! interval width against the first one.

use crate::error::{Error, Result};
use crate::numeric::BinFloat;
use serde::{Deserialize, Serialize};

/// Default relative tolerance for interval widths
pub const DEFAULT_GRID_RTOL: f64 = 1e-5;

/// Default absolute tolerance for interval widths
pub const DEFAULT_GRID_ATOL: f64 = 1e-8;

/// Tolerance used when deciding whether a grid is equidistant
///
/// An interval `d_i` is accepted when `|d_i - d_0| <= atol * s + rtol * |d_0|`
/// with `s = min(1, max(|min|, |max|))`. Grids whose coordinates all lie below
/// one in magnitude get a proportionally smaller absolute term; larger grids
/// see `atol` unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridTolerance {
    /// Relative tolerance
    pub rtol: f64,
    /// Absolute tolerance
    pub atol: f64,
}

impl Default for GridTolerance {
    fn default() -> Self {
        Self {
            rtol: DEFAULT_GRID_RTOL,
            atol: DEFAULT_GRID_ATOL,
        }
    }
}

impl GridTolerance {
    /// Create a tolerance from explicit values
    pub fn new(rtol: f64, atol: f64) -> Self {
        Self { rtol, atol }
    }

    /// Check that both tolerances are finite and non-negative
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("grid_rtol", self.rtol), ("grid_atol", self.atol)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    fn accepts<T: BinFloat>(&self, width: T, first_width: T, scale: T) -> bool {
        let bound =
            T::from_f64(self.atol) * scale + T::from_f64(self.rtol) * first_width.abs();
        (width - first_width).abs() <= bound
    }
}

/// Summary of a validated equidistant grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec<T: BinFloat = f64> {
    min: T,
    max: T,
    num_points: usize,
    dx: T,
}

impl<T: BinFloat> GridSpec<T> {
    /// Validate grid points with the default tolerance
    pub fn from_points(points: &[T]) -> Result<Self> {
        Self::with_tolerance(points, GridTolerance::default())
    }

    /// Validate grid points and summarize them
    ///
    /// Fails with [`Error::NonFinite`] for NaN/Inf points and with
    /// [`Error::InvalidGrid`] when there are fewer than two points, the
    /// points are not strictly increasing, or the spacing is not constant.
    pub fn with_tolerance(points: &[T], tolerance: GridTolerance) -> Result<Self> {
        Error::check_finite(points, "grid_points")?;

        if points.len() < 2 {
            return Err(Error::invalid_grid(format!(
                "at least 2 grid points are required, got {}",
                points.len()
            )));
        }

        let first = points[1] - points[0];
        let scale = points[0]
            .abs()
            .max(points[points.len() - 1].abs())
            .min(T::one());
        for (i, pair) in points.windows(2).enumerate() {
            let width = pair[1] - pair[0];
            if width <= T::zero() {
                return Err(Error::invalid_grid(format!(
                    "grid points must be strictly increasing, interval {i} has width {width}"
                )));
            }
            if !tolerance.accepts(width, first, scale) {
                return Err(Error::invalid_grid(format!(
                    "grid is not equidistant, interval {i} has width {width} but interval 0 has width {first}"
                )));
            }
        }

        let num_points = points.len();
        let min = points[0];
        let max = points[num_points - 1];
        let dx = (max - min) / T::from_usize(num_points - 1);

        Ok(Self {
            min,
            max,
            num_points,
            dx,
        })
    }

    /// Smallest grid coordinate
    pub fn min(&self) -> T {
        self.min
    }

    /// Largest grid coordinate
    pub fn max(&self) -> T {
        self.max
    }

    /// Number of grid points (M)
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// Number of intervals between grid points (M - 1)
    pub fn num_intervals(&self) -> usize {
        self.num_points - 1
    }

    /// Width of one interval
    pub fn dx(&self) -> T {
        self.dx
    }

    /// Whether a value lies within `[min, max]`
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}
