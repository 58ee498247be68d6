//! Error types for linear binning
//!
//! Provides a unified error type for all kde-binning crates.

use crate::numeric::BinFloat;
use thiserror::Error;

/// Core error type for binning operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input contains NaN or infinite values
    #[error("Non-finite value: {context} contains NaN or infinite values")]
    NonFinite { context: String },

    /// Grid has too few points, is not increasing, or is not equidistant
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Weights do not line up with the data
    #[error("Length mismatch: expected {expected} weights, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Weights are negative or carry no mass
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Configuration value could not be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Feature not available
    #[error("Feature not available: {0}")]
    FeatureNotAvailable(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::NonFinite {
            context: context.to_string(),
        }
    }

    /// Create an error for an unusable grid
    pub fn invalid_grid(reason: impl Into<String>) -> Self {
        Self::InvalidGrid(reason.into())
    }

    /// Create an error for a weight vector of the wrong length
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Fail if any value is NaN or infinite
    pub fn check_finite<T: BinFloat>(values: &[T], context: &str) -> Result<()> {
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Self::non_finite(context));
        }
        Ok(())
    }
}
