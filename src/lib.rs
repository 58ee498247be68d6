//! Linear binning for fast kernel density estimation
//!
//! Convolution-based KDE first needs the sample mass on an equidistant grid.
//! This crate computes that mass by linear (triangular) binning: every sample
//! splits its weight between its two neighbouring grid points in proportion
//! to its distance from each.
//!
//! # Key Features
//!
//! - **Two strategies, one contract**: sort-based ([`VectorizedBinner`]) and
//!   single pass ([`AcceleratedBinner`]) binning give the same result up to
//!   summation order
//! - **Explicit selection**: [`Binner`] resolves the strategy once from a
//!   [`BinningConfig`] and injected [`Capabilities`]
//! - **Strict inputs**: NaN/Inf values, uneven grids and mismatched weights
//!   are rejected before any work is done
//! - **Always normalized**: weights, explicit or uniform, are rescaled to sum
//!   to one on every strategy
//!
//! Samples outside `[min(grid), max(grid)]` are not an error; their mass is
//! simply left out of the result.
//!
//! # Examples
//!
//! ```rust
//! use kde_binning::linear_binning;
//!
//! let data: [f64; 6] = [1.0, 1.5, 1.5, 2.0, 2.8, 3.0];
//! let grid = [1.0, 2.0, 3.0];
//!
//! let mass = linear_binning(&data, &grid, None).unwrap();
//! let expected = [0.33333, 0.36667, 0.30000];
//! for (m, e) in mass.iter().zip(expected.iter()) {
//!     assert!((m - e).abs() < 1e-5);
//! }
//! ```
//!
//! ## Choosing a strategy
//!
//! ```rust
//! use kde_binning::{Binner, BinningConfig, Capabilities, Strategy};
//!
//! let config: BinningConfig = serde_json::from_str(r#"{"strategy": "vectorized"}"#).unwrap();
//! let binner = Binner::new(config, Capabilities::detect()).unwrap();
//! assert_eq!(binner.active_strategy(), Strategy::Vectorized);
//!
//! let data: [f64; 4] = [2.0, 2.5, 3.0, 4.0];
//! let grid = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let weights = [1.0, 2.0, 3.0, 4.0];
//! let mass = binner.bin(&data, &grid, Some(&weights[..])).unwrap();
//! assert!((mass[3] - 0.4).abs() < 1e-12);
//! ```

pub use binning_core::{
    normalize_weights, BinFloat, BinnedSample, BinningConfig, CoordinateTransform, Error,
    GridSpec, GridTolerance, PreparedInput, Result, Strategy, DEFAULT_GRID_ATOL,
    DEFAULT_GRID_RTOL, STRATEGY_ENV_VAR,
};
pub use binning_linear::{
    linear_binning, AcceleratedBinner, Binner, Capabilities, LinearBinner, VectorizedBinner,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        linear_binning, AcceleratedBinner, BinFloat, Binner, BinningConfig, Capabilities, Error,
        LinearBinner, Result, Strategy, VectorizedBinner,
    };
}
