//! Sample weight normalization
//!
//! Weights are always rescaled to sum to one before binning, whichever
//! strategy runs afterwards. Missing weights mean every sample counts the same.

use crate::error::{Error, Result};
use crate::numeric::BinFloat;

/// Produce normalized weights for `num_samples` samples
///
/// - `None` yields uniform weights `1 / num_samples`.
/// - Provided weights must match `num_samples` in length, be finite and
///   non-negative, and carry a positive total.
///
/// Empty data yields an empty weight vector.
pub fn normalize_weights<T: BinFloat>(weights: Option<&[T]>, num_samples: usize) -> Result<Vec<T>> {
    let Some(weights) = weights else {
        if num_samples == 0 {
            return Ok(Vec::new());
        }
        let uniform = T::one() / T::from_usize(num_samples);
        return Ok(vec![uniform; num_samples]);
    };

    Error::check_finite(weights, "weights")?;

    if weights.len() != num_samples {
        return Err(Error::length_mismatch(num_samples, weights.len()));
    }
    if num_samples == 0 {
        return Ok(Vec::new());
    }

    if let Some((i, w)) = weights.iter().enumerate().find(|(_, w)| **w < T::zero()) {
        return Err(Error::InvalidWeights(format!(
            "weights must be non-negative, weight {i} is {w}"
        )));
    }

    let largest = weights.iter().fold(T::zero(), |acc, &w| acc.max(w));
    if largest <= T::zero() {
        return Err(Error::InvalidWeights(
            "total weight is zero, nothing to distribute".to_string(),
        ));
    }

    // Scaled weights lie in [0, 1], so their sum stays finite
    let total = weights.iter().fold(T::zero(), |acc, &w| acc + w / largest);

    Ok(weights.iter().map(|&w| w / largest / total).collect())
}
