//! Floating-point element types accepted by the binners

use num_traits::{Float, NumAssign, NumCast};
use std::fmt::{Debug, Display};

/// Float types that samples, grids and weights can be expressed in
///
/// Implemented for `f32` and `f64`.
pub trait BinFloat: Float + NumAssign + Debug + Display + Send + Sync + 'static {
    /// Convert an `f64` constant into this type
    fn from_f64(value: f64) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::nan)
    }

    /// Convert a count into this type
    fn from_usize(value: usize) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::infinity)
    }
}

impl BinFloat for f32 {}
impl BinFloat for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(<f64 as BinFloat>::from_f64(0.25), 0.25);
        assert_eq!(<f32 as BinFloat>::from_f64(0.25), 0.25f32);
        assert_eq!(<f64 as BinFloat>::from_usize(7), 7.0);
        assert_eq!(<f32 as BinFloat>::from_usize(1024), 1024.0f32);
    }
}
