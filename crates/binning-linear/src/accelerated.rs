//! Single pass linear binning
//!
//! One loop over the samples, two accumulator increments per sample, no
//! sorting. This is the cheaper strategy for very large inputs.
//!
//! Explicit weights are normalized exactly as in the vectorized strategy, so
//! the result never sums to the raw weight total.

use crate::traits::LinearBinner;
use binning_core::{BinFloat, GridTolerance, PreparedInput, Strategy};
use tracing::trace;

/// Linear binner that scatters each sample directly into the accumulator
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceleratedBinner {
    tolerance: GridTolerance,
}

impl AcceleratedBinner {
    /// Create a binner with the default grid tolerance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a binner with a custom grid tolerance
    pub fn with_tolerance(tolerance: GridTolerance) -> Self {
        Self { tolerance }
    }

    /// Check if the accelerated strategy is shipped in this build
    ///
    /// Controlled by the `accelerated` cargo feature.
    pub fn is_available() -> bool {
        cfg!(feature = "accelerated")
    }
}

impl<T: BinFloat> LinearBinner<T> for AcceleratedBinner {
    fn name(&self) -> &'static str {
        "accelerated"
    }

    fn strategy(&self) -> Strategy {
        Strategy::Accelerated
    }

    fn tolerance(&self) -> GridTolerance {
        self.tolerance
    }

    fn bin_prepared(&self, input: &PreparedInput<'_, T>) -> Vec<T> {
        let num_points = input.grid().num_points();

        // Slot `num_points` absorbs the high share of the last bucket
        let mut result = vec![T::zero(); num_points + 1];
        let mut binned = 0usize;

        for sample in input.samples() {
            let high = sample.high_share();
            result[sample.bucket] += sample.weight - high;
            result[sample.bucket + 1] += high;
            binned += 1;
        }

        let dropped = input.num_samples() - binned;
        if dropped > 0 {
            trace!(dropped, "samples outside grid range excluded");
        }

        result.truncate(num_points);
        result
    }
}
