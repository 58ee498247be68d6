//! Core trait for binning strategies

use binning_core::{BinFloat, GridTolerance, PreparedInput, Result, Strategy};

/// Linear binning of samples onto an equidistant grid
///
/// Each in-range sample at fractional grid index `b + f` gives `w * (1 - f)`
/// to grid point `b` and `w * f` to grid point `b + 1`. Weights are always
/// normalized to sum to one first, so the result sums to one when every
/// sample lies inside the grid range.
pub trait LinearBinner<T: BinFloat = f64>: Clone + Send + Sync {
    /// Name of this binner for debugging/logging
    fn name(&self) -> &'static str;

    /// The concrete strategy this binner runs
    fn strategy(&self) -> Strategy;

    /// Tolerance used to validate grids
    fn tolerance(&self) -> GridTolerance {
        GridTolerance::default()
    }

    /// Bin already validated input
    fn bin_prepared(&self, input: &PreparedInput<'_, T>) -> Vec<T>;

    /// Validate the inputs and bin them
    ///
    /// Returns a vector with one mass value per grid point.
    fn bin(&self, data: &[T], grid_points: &[T], weights: Option<&[T]>) -> Result<Vec<T>> {
        let input = PreparedInput::with_tolerance(data, grid_points, weights, self.tolerance())?;
        Ok(self.bin_prepared(&input))
    }
}
